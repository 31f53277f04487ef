//! Names that must not be mentioned.
//!
//! [`poison!`](crate::poison) hides a binding behind a block-local constant
//! of type [`Poisoned`] carrying `#[deprecated]`. Items declared in a block
//! take precedence over outer `let` bindings and parameters, so every
//! mention of the name inside the block resolves to the constant and raises
//! the `deprecated` lint. Nothing is generated at runtime.

/// Placeholder bound to poisoned names.
///
/// It has no methods and implements no traits, so even code that ignores
/// the lint cannot do anything useful with it.
pub struct Poisoned(());

impl Poisoned {
    #[doc(hidden)]
    pub const MARKER: Self = Self(());
}

/// Forbid any mention of the given names inside one block.
///
/// Typical use is a variable whose value has logically moved elsewhere:
///
/// ```
/// let mut pending = vec![1, 2, 3];
/// let batch = std::mem::take(&mut pending);
/// let sum: i32 = umbra::poison!(pending => {
///     // `pending` is empty now; reading it here would be a mistake.
///     batch.iter().sum()
/// });
/// assert_eq!(sum, 6);
/// assert!(pending.is_empty());
/// ```
///
/// Any mention is reported, including ones that would otherwise type-check.
/// Under `deny(deprecated)` it is an error:
///
/// ```compile_fail
/// #![deny(deprecated)]
/// let token = String::from("secret");
/// umbra::poison!(token => {
///     let _alias = &token;
/// });
/// ```
///
/// Re-declaring a poisoned name inside the block is rejected as well, since
/// `let name = …` would match against the constant.
#[macro_export]
macro_rules! poison {
    ($($name:ident),+ $(,)? => $body:block) => {{
        $(
            #[allow(non_upper_case_globals, dead_code)]
            #[deprecated(note = "poisoned by umbra::poison!")]
            const $name: $crate::Poisoned = $crate::Poisoned::MARKER;
        )+
        $body
    }};
}
