//! Reference Rust implementations of the Gray-order corner lookup.
//!
//! Index -> corner:
//! - 0: (0, 0)
//! - 1: (1, 0)
//! - 2: (1, 1)
//! - 3: (0, 1)
//! - _: (0, 0), same as index 0
//!
//! Both functions are `#[inline(never)]` so the call site cannot fold the
//! lookup into the accumulation loop.

use super::super::point::Point;

/// Corner lookup through a `match`, one arm per case.
///
/// The compiler may still lower this to a jump table or a CMOV sequence, but
/// at `opt-level = 3` on x86_64 it usually stays a compare-and-branch chain,
/// which is what the benchmark wants to stress.
#[inline(never)]
pub fn map_branch(index: usize) -> Point {
    match index {
        1 => Point::new(1, 0),
        2 => Point::new(1, 1),
        3 => Point::new(0, 1),
        _ => Point::new(0, 0),
    }
}

/// Corner lookup using only bit arithmetic.
///
/// `y` is bit 1, `x` is bit 0 XOR bit 1. The `valid` mask zeroes both
/// coordinates for indices above 3 without a conditional jump.
#[inline(never)]
pub fn map_branch_free(index: usize) -> Point {
    let first_bit = index & 1;
    let second_bit = (index >> 1) & 1;
    let valid = (index < 4) as usize;

    Point::new((first_bit ^ second_bit) * valid, second_bit * valid)
}
