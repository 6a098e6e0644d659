//! Tests for the corner lookup implementations

use super::code::{get_variants, original};
use super::point::Point;

/// Expected corner for each in-range index
pub const GRAY_TABLE: [Point; 4] = [
    Point::new(0, 0),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
];

/// Verify all variants produce the same results as the reference branch version
pub fn verify_all() -> Result<(), String> {
    for (index, expected) in GRAY_TABLE.iter().enumerate() {
        let reference = original::map_branch(index);
        if reference != *expected {
            return Err(format!(
                "Reference mapper returned {} for index {}, table says {}",
                reference, index, expected
            ));
        }
    }

    let test_indices: Vec<usize> = (0..64)
        .chain([255, 256, 1 << 20, usize::MAX - 1, usize::MAX])
        .collect();

    for variant in get_variants() {
        for &index in &test_indices {
            let expected = original::map_branch(index);
            let actual = (variant.function)(index);

            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for index {}: expected {}, got {}",
                    variant.name, index, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_gray_order() {
        // Consecutive corners differ in exactly one coordinate.
        for i in 0..4 {
            let a = GRAY_TABLE[i];
            let b = GRAY_TABLE[(i + 1) % 4];
            assert_eq!(a.x.abs_diff(b.x) + a.y.abs_diff(b.y), 1);
        }
    }

    #[test]
    fn test_high_bits_do_not_alias() {
        // Low two bits look valid, a higher bit makes the index out of range.
        for variant in get_variants() {
            for shift in 2..usize::BITS {
                for low in 0..4usize {
                    let index = (1usize << shift) | low;
                    assert_eq!(
                        (variant.function)(index),
                        Point::ORIGIN,
                        "{}: index {:#x}",
                        variant.name,
                        index
                    );
                }
            }
        }
    }
}
