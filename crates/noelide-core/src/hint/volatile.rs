//! Volatile-alias barrier.
//!
//! Used on targets without stable inline assembly, and everywhere when the
//! `force-volatile` feature is on. The value is mutated in place through a
//! raw alias by adding its additive identity, then its bytes are loaded and
//! stored back through the same alias with volatile accesses. Volatile
//! accesses are side effects the optimizer may not elide, so the value must
//! be live in memory at the call.
//!
//! Nothing is copied out of the value or moved, so non-`Copy` types that own
//! heap data work as well as scalars. The additive step is what restricts
//! this strategy to [`Touch`] types; a type without `AddAssign` is rejected
//! when the program is built:
//!
//! ```compile_fail,E0277
//! use noelide_core::hint::volatile::do_not_optimize_away;
//!
//! #[derive(Default)]
//! struct Label(u8);
//!
//! do_not_optimize_away(&mut Label(1));
//! ```
//!
//! Adding the identity leaves every value equal to what it was. For floats
//! the one visible difference is that `-0.0` comes back as `+0.0`, since
//! IEEE addition of `+0.0` rounds that way.

use core::mem::ManuallyDrop;
use core::ops::AddAssign;
use core::ptr;

/// Values that support an additive self-mutation.
///
/// Implemented for every type that has `AddAssign` and an additive identity
/// through `Default`: all primitive integers and floats, and any struct that
/// derives `Default` and implements `AddAssign`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support additive self-mutation",
    label = "the volatile-alias barrier needs `AddAssign + Default` here",
    note = "implement `AddAssign` and `Default` for `{Self}`, or build for a target with inline assembly"
)]
pub trait Touch {
    /// Add the additive identity to `self` in place, then reload and store
    /// its bytes with volatile accesses.
    fn touch(&mut self);
}

impl<T> Touch for T
where
    T: AddAssign + Default,
{
    #[inline(always)]
    fn touch(&mut self) {
        let alias: *mut T = self;
        // SAFETY: `alias` comes from a live `&mut T`, so it is valid, aligned
        // and unaliased for the duration of this call. The bytes read into
        // `ManuallyDrop` are never dropped and are written straight back to
        // the place they came from with nothing in between, so ownership of
        // any heap data is unchanged.
        unsafe {
            *alias += T::default();
            let bytes = ptr::read_volatile(alias.cast::<ManuallyDrop<T>>());
            ptr::write_volatile(alias.cast::<ManuallyDrop<T>>(), bytes);
        }
    }
}

/// Hide `value` from the optimizer with volatile accesses.
#[inline(always)]
pub fn do_not_optimize_away<T: Touch>(value: &mut T) {
    value.touch()
}
