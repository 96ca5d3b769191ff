//! Optimization barrier for values produced inside timed code.
//!
//! Consider the trivial baseline
//!
//! ```
//! let mut x = 0i32;
//! for i in 0..64 {
//!     x += i;
//! }
//! # assert_eq!(x, 2016);
//! ```
//!
//! An optimizing build compiles the whole loop to `mov eax, 2016`, which
//! makes it useless as a baseline. Passing the accumulator through
//! [`do_not_optimize_away`] on every iteration creates a loop-carried
//! dependency the optimizer cannot prove unnecessary, so the adds stay:
//!
//! ```
//! use noelide_core::do_not_optimize_away;
//!
//! let mut x = 0i32;
//! for i in 0..64 {
//!     x += i;
//!     do_not_optimize_away(&mut x);
//! }
//! assert_eq!(x, 2016);
//! ```
//!
//! # Strategies
//!
//! | Target                                               | Strategy                   |
//! |------------------------------------------------------|----------------------------|
//! | x86, x86_64, arm, aarch64, riscv32/64, loongarch64   | [`Strategy::InlineAsm`]    |
//! | everything else, or with `force-volatile`            | [`Strategy::VolatileAlias`]|
//!
//! The choice is made with `cfg` at build time. Both strategies are also
//! reachable directly through [`asm`] and [`volatile`] so a harness (or a
//! test) can pin one.

#[cfg(any(
    target_arch = "x86",
    target_arch = "x86_64",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "loongarch64"
))]
pub mod asm;
pub mod volatile;

pub use volatile::Touch;

/// Barrier implementation selected for this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Empty inline-assembly block that takes the value's address as an
    /// operand and may read or write any memory.
    InlineAsm,
    /// Volatile read-modify-write of the value through a raw alias.
    VolatileAlias,
}

impl Strategy {
    /// Short identifier suitable for logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::InlineAsm => "inline-asm",
            Strategy::VolatileAlias => "volatile-alias",
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy backing [`do_not_optimize_away`] in this build.
#[cfg(all(
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    ),
    not(feature = "force-volatile")
))]
pub const ACTIVE_STRATEGY: Strategy = Strategy::InlineAsm;

/// Strategy backing [`do_not_optimize_away`] in this build.
#[cfg(not(all(
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    ),
    not(feature = "force-volatile")
)))]
pub const ACTIVE_STRATEGY: Strategy = Strategy::VolatileAlias;

/// Types the active strategy can hide from the optimizer.
///
/// With the inline-assembly strategy every type qualifies, sized or not.
/// With the volatile-alias strategy only types with an additive
/// self-mutation do, i.e. `AddAssign + Default` (see [`Touch`]). Writing the
/// bound as `Escape` keeps harness code generic over both.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not support additive self-mutation",
    label = "the volatile-alias barrier needs `AddAssign + Default` here",
    note = "implement `AddAssign` and `Default` for `{Self}`, or build for a target with inline assembly"
)]
pub trait Escape {
    /// Apply the active barrier to `self`.
    fn escape(&mut self);
}

#[cfg(all(
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    ),
    not(feature = "force-volatile")
))]
impl<T: ?Sized> Escape for T {
    #[inline(always)]
    fn escape(&mut self) {
        asm::do_not_optimize_away(self)
    }
}

#[cfg(not(all(
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "arm",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "loongarch64"
    ),
    not(feature = "force-volatile")
)))]
impl<T: core::ops::AddAssign + Default> Escape for T {
    #[inline(always)]
    fn escape(&mut self) {
        volatile::do_not_optimize_away(self)
    }
}

/// Make `value` escape to an observer the optimizer cannot see.
///
/// After this returns, the compiler must assume `value` was both read and
/// written, so the code that produced it can be neither removed, hoisted out
/// of an enclosing loop, nor folded into a closed form. The value itself
/// compares equal afterward; with the volatile-alias strategy a float `-0.0`
/// becomes `+0.0`.
///
/// Temporaries work as well as named places; the temporary is borrowed where
/// it lives, not copied:
///
/// ```
/// use noelide_core::do_not_optimize_away;
///
/// let (a, b) = (40u32, 2u32);
/// do_not_optimize_away(&mut (a + b));
/// ```
///
/// This allocates nothing, cannot fail, and touches only the caller's value,
/// so it is safe to call from any number of threads concurrently.
#[inline(always)]
pub fn do_not_optimize_away<T: Escape + ?Sized>(value: &mut T) {
    value.escape()
}

/// By-value form of [`do_not_optimize_away`].
///
/// Binds `value`, applies the barrier, and hands it back. Handy for
/// wrapping the result of an expression inline:
///
/// ```
/// use noelide_core::keep;
///
/// let digest = keep(0xdead_beef_u32.rotate_left(7));
/// assert_eq!(digest, 0xdead_beef_u32.rotate_left(7));
/// ```
#[inline(always)]
pub fn keep<T: Escape>(value: T) -> T {
    let mut value = value;
    do_not_optimize_away(&mut value);
    value
}
