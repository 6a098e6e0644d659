//! FFI bindings for the C corner lookups in `gray_point.c`.

#[cfg(c_implementation_active)]
use super::super::point::Point;

#[cfg(c_implementation_active)]
mod ffi {
    use super::Point;

    extern "C" {
        pub fn gray_point_c_switch(index: usize) -> Point;
        pub fn gray_point_c_bits(index: usize) -> Point;
    }
}

/// C `switch` statement
#[cfg(c_implementation_active)]
#[inline(never)]
pub fn map_c_switch(index: usize) -> Point {
    unsafe { ffi::gray_point_c_switch(index) }
}

/// C bit arithmetic, no branches
#[cfg(c_implementation_active)]
#[inline(never)]
pub fn map_c_bits(index: usize) -> Point {
    unsafe { ffi::gray_point_c_bits(index) }
}

/// Whether the build script compiled the C sources
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(all(test, c_implementation_active))]
mod tests {
    use super::*;

    #[test]
    fn test_c_switch_matches_table() {
        assert_eq!(map_c_switch(1), Point::new(1, 0));
        assert_eq!(map_c_switch(2), Point::new(1, 1));
        assert_eq!(map_c_switch(9), Point::ORIGIN);
    }

    #[test]
    fn test_c_bits_matches_table() {
        assert_eq!(map_c_bits(2), Point::new(1, 1));
        assert_eq!(map_c_bits(3), Point::new(0, 1));
        assert_eq!(map_c_bits(usize::MAX), Point::ORIGIN);
    }
}
