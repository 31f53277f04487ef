//! Shadowing without shadow lints.
//!
//! Rust allows re-declaring a name, but projects that enable clippy's
//! `shadow_same`, `shadow_reuse` or `shadow_unrelated` get a diagnostic for
//! every such re-declaration. The macros here attach an `allow` for those
//! lints to the generated `let` statements only, so the lint stays active
//! for the surrounding code.

/// Like [`let_in!`](crate::let_in), with the shadow lints allowed on each
/// binding.
///
/// The `deny` below only takes effect under clippy, which doctests do not
/// run. The module's unit tests deny the same lints, so
/// `cargo clippy --all-targets` is what checks the suppression.
///
/// ```
/// #![deny(clippy::shadow_unrelated)]
///
/// let offset = -3i32;
/// let shifted = umbra::shadow!(let offset: u8 = 200 => {
///     offset.wrapping_add(100)
/// });
/// assert_eq!(shifted, 44);
/// assert_eq!(offset, -3);
/// ```
#[macro_export]
macro_rules! shadow {
    (
        $($(#[$attr:meta])* let $($binding:ident)+ $(: $ty:ty)? = $init:expr),+ $(,)?
        => $body:block
    ) => {
        $crate::let_in!(
            $(
                #[allow(clippy::shadow_same, clippy::shadow_reuse, clippy::shadow_unrelated)]
                $(#[$attr])*
                let $($binding)+ $(: $ty)? = $init
            ),+
            => $body
        )
    };
}

/// Emit `let` statements into the current scope with the shadow lints
/// allowed on each of them.
///
/// Unlike [`shadow!`](crate::shadow) no block is introduced: the bindings
/// stay visible until the end of the enclosing scope.
///
/// ```
/// let retries = "3";
/// umbra::ignore_shadow! {
///     let retries: u32 = retries.parse().unwrap_or(1);
/// }
/// assert_eq!(retries, 3);
/// ```
#[macro_export]
macro_rules! ignore_shadow {
    ($($(#[$attr:meta])* let $($binding:ident)+ $(: $ty:ty)? = $init:expr;)*) => {
        $(
            #[allow(clippy::shadow_same, clippy::shadow_reuse, clippy::shadow_unrelated)]
            $(#[$attr])*
            let $($binding)+ $(: $ty)? = $init;
        )*
    };
}
