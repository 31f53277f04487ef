//! Attribute forms of the `umbra` rebinding macros.
//!
//! Each attribute applies to a function or method and wraps its whole body
//! in the matching declarative macro from `umbra`, rebinding the listed
//! parameters:
//!
//! ```text
//! #[umbra::attr::read_in(origin, scale)]
//! fn project<P: Copy>(origin: &P, scale: &f64, points: &[P]) -> Vec<P> {
//!     // `origin` and `scale` are `umbra::ReadIn` views here
//! }
//! ```
//!
//! The expansion refers to `::umbra`, so these attributes are meant to be
//! used through the `umbra::attr` re-exports.
//!
//! # Logging
//!
//! Set `UMBRA_MACRO_LOG` to an `EnvFilter` directive (for example
//! `umbra_macros=trace`) to log expansions to stderr while compiling.

mod args;
mod expand;
mod trace;

use proc_macro::TokenStream;

use crate::expand::Rebinding;

/// Freeze the listed parameters for the whole function body.
///
/// # Example
///
/// ```text
/// #[umbra::attr::freeze(config)]
/// fn run(mut config: Config) {
///     // `config` is `&Config` here
/// }
/// ```
#[proc_macro_attribute]
pub fn freeze(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::rebind(Rebinding::Freeze, attr, item)
}

/// Poison the listed parameters for the whole function body.
///
/// Useful for parameters kept only for signature compatibility.
///
/// ```text
/// #[umbra::attr::poison(legacy_flags)]
/// fn open(path: &Path, legacy_flags: u32) -> io::Result<File> { ... }
/// ```
#[proc_macro_attribute]
pub fn poison(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::rebind(Rebinding::Poison, attr, item)
}

/// Read in the listed reference parameters for the whole function body.
///
/// Accepts `policy = Path` after the names to use a project-specific
/// `umbra::BindingModePolicy`.
///
/// ```text
/// #[umbra::attr::read_in(key, policy = crate::CopyUpTo32)]
/// fn lookup<K: Copy + Hash + Eq>(table: &Table<K>, key: &K) -> Option<&Entry> { ... }
/// ```
#[proc_macro_attribute]
pub fn read_in(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand::rebind(Rebinding::ReadIn, attr, item)
}
