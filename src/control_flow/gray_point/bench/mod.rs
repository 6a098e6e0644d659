//! Single timed pass of a mapper over an index sequence

use super::code::MapFn;
use super::point::Point;
use crate::utils::bench::Timing;
use std::hint::black_box;

/// Outcome of one pass: the accumulated point and how long it took
#[derive(Clone, Copy, Debug)]
pub struct PassResult {
    pub point: Point,
    pub timing: Timing,
}

/// Sum `func(index)` over the whole sequence, starting at the origin.
///
/// The sum only exists so the optimizer cannot drop the calls.
#[inline(never)]
pub fn accumulate(sequence: &[usize], func: MapFn) -> Point {
    let mut result = Point::ORIGIN;
    for &index in sequence {
        result += func(black_box(index));
    }
    result
}

/// Time one full pass of `func` over `sequence`.
pub fn benchmark_with_sequence(sequence: &[usize], func: MapFn) -> PassResult {
    let (timing, point) = crate::measure!(accumulate(black_box(sequence), func));

    PassResult {
        point: black_box(point),
        timing,
    }
}
