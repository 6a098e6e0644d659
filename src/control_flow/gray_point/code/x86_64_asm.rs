//! x86_64 assembly versions of the corner lookup, so the machine code under
//! test does not depend on what LLVM decides to emit for the Rust versions.
//!
//! # Jcc chain
//! ```asm
//! gray_point_jcc:
//!     cmp rdi, 1
//!     je .one
//!     cmp rdi, 2
//!     je .two
//!     cmp rdi, 3
//!     je .three
//!     xor eax, eax          ; case 0 and default
//!     xor edx, edx
//!     ret
//! ```
//!
//! # CMOV
//! ```asm
//! gray_point_cmov:
//!     mov rdx, rdi
//!     shr rdx, 1
//!     and rdx, 1            ; y = bit1
//!     mov rax, rdi
//!     and rax, 1
//!     xor rax, rdx          ; x = bit0 ^ bit1
//!     xor ecx, ecx
//!     cmp rdi, 3
//!     cmova rax, rcx        ; out of range -> (0, 0)
//!     cmova rdx, rcx
//! ```
//!
//! | Aspect | Jcc chain | CMOV |
//! |--------|-----------|------|
//! | Branches per call | 1-3 conditional | none |
//! | Random input | mispredicts often | unaffected |
//! | Constant input | predicted perfectly | unaffected |

use super::super::point::Point;
use std::arch::asm;

/// Corner lookup with a chain of conditional jumps.
#[inline(never)]
pub fn map_jcc(index: usize) -> Point {
    let x: usize;
    let y: usize;

    unsafe {
        asm!(
            "cmp {idx}, 1",
            "je 21f",
            "cmp {idx}, 2",
            "je 22f",
            "cmp {idx}, 3",
            "je 23f",

            // Case 0 and every out-of-range index
            "xor {x:e}, {x:e}",
            "xor {y:e}, {y:e}",
            "jmp 99f",

            "21:",
            "mov {x:e}, 1",
            "xor {y:e}, {y:e}",
            "jmp 99f",

            "22:",
            "mov {x:e}, 1",
            "mov {y:e}, 1",
            "jmp 99f",

            "23:",
            "xor {x:e}, {x:e}",
            "mov {y:e}, 1",

            "99:",

            idx = in(reg) index,
            x = out(reg) x,
            y = out(reg) y,
            options(pure, nomem, nostack),
        );
    }

    Point::new(x, y)
}

/// Corner lookup with bit arithmetic and CMOV for the range check.
#[inline(never)]
pub fn map_cmov(index: usize) -> Point {
    let x: usize;
    let y: usize;

    unsafe {
        asm!(
            "mov {y}, {idx}",
            "shr {y}, 1",
            "and {y}, 1",
            "mov {x}, {idx}",
            "and {x}, 1",
            "xor {x}, {y}",

            "xor {zero:e}, {zero:e}",
            "cmp {idx}, 3",
            "cmova {x}, {zero}",
            "cmova {y}, {zero}",

            idx = in(reg) index,
            x = out(reg) x,
            y = out(reg) y,
            zero = out(reg) _,
            options(pure, nomem, nostack),
        );
    }

    Point::new(x, y)
}
