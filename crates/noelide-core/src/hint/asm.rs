//! Inline-assembly barrier.
//!
//! The block emits no instructions. Its only operand is the address of the
//! value, and it is declared without `nomem` or `readonly`, so the compiler
//! has to assume the assembly read the value and wrote something new to it.
//! That forces the value into memory before the block and forbids reusing
//! any cached copy after it.

use core::arch::asm;

/// Hide `value` from the optimizer with an empty `asm!` block.
///
/// Works for any type, including unsized ones such as slices and `str`.
#[inline(always)]
pub fn do_not_optimize_away<T: ?Sized>(value: &mut T) {
    let addr = (value as *mut T).cast::<u8>();
    // SAFETY: the template is empty, so nothing is executed and no register
    // other than the input operand is involved.
    unsafe {
        asm!("/* {0} */", in(reg) addr, options(nostack, preserves_flags));
    }
}
