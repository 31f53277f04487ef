//! Scoped rebinding of names.
//!
//! Every construct in this crate re-declares one or more names for exactly
//! the block that follows it, then lets the outer bindings come back:
//!
//! - [`let_in!`] introduces fresh bindings for one block.
//! - [`shadow!`] does the same with clippy's shadow lints allowed on the
//!   re-declaration.
//! - [`freeze!`] rebinds names to shared references of themselves, so the
//!   block cannot mutate them.
//! - [`poison!`] rebinds names to a deprecated placeholder, so any mention
//!   of them inside the block is reported.
//! - [`read_in!`] rebinds reference parameters to a [`ReadIn`], copying the
//!   referent when a [`BindingModePolicy`] says a copy is cheaper than the
//!   indirection.
//!
//! The [`attr`] module has attribute forms of `freeze`, `poison` and
//! `read_in` that cover a whole function body.
//!
//! # Scope discipline
//!
//! Each construct expands to a single block expression holding the new
//! `let` statements followed by the body. The body therefore runs exactly
//! once, its value is the value of the whole invocation, and the bindings
//! are dropped on every way out of the block (`return`, `break`, `?`, or
//! unwinding). Temporaries the macros need are ordinary hygienic locals, so
//! nested invocations never see each other's internals.
//!
//! ```
//! fn scaled<T>(values: &Vec<T>, factor: &T) -> Vec<T>
//! where
//!     T: Copy + std::ops::Mul<Output = T>,
//! {
//!     // `factor` becomes a copy when `T` is small; `values` stays an alias.
//!     umbra::read_in!(values, factor => {
//!         values.iter().map(|value| *value * *factor).collect()
//!     })
//! }
//!
//! assert_eq!(scaled(&vec![1, 2, 3], &10), vec![10, 20, 30]);
//! ```

mod freeze;
mod poison;
mod policy;
mod read_in;
mod scope;
mod shadow;

pub use poison::Poisoned;
pub use policy::{
    decide, decide_with_limit, AlwaysAlias, BindingMode, BindingModePolicy, DefaultPolicy,
    SizeLimit, TypeDescriptor, DEFAULT_MAX_BYTES,
};
pub use read_in::ReadIn;

/// Attribute forms that rebind function parameters for the whole body.
///
/// ```
/// #[umbra::attr::freeze(limit)]
/// fn clamp_all(values: &mut [u32], limit: u32) {
///     for value in values.iter_mut() {
///         *value = (*value).min(*limit);
///     }
/// }
///
/// let mut values = [1, 50, 7];
/// clamp_all(&mut values, 10);
/// assert_eq!(values, [1, 10, 7]);
/// ```
///
/// Names are checked against the signature. `read_in` only accepts
/// parameters declared as references:
///
/// ```compile_fail
/// #[umbra::attr::read_in(count)]
/// fn twice(count: u32) -> u32 {
///     count * 2
/// }
/// ```
///
/// A name that is not a parameter is rejected at the name:
///
/// ```compile_fail
/// #[umbra::attr::freeze(total)]
/// fn sum(values: &[u32]) -> u32 {
///     values.iter().sum()
/// }
/// ```
pub mod attr {
    pub use umbra_macros::{freeze, poison, read_in};
}

#[doc(hidden)]
pub mod __private {
    pub use crate::read_in::{Probe, ReadInAlias, ReadInCopy};
}
