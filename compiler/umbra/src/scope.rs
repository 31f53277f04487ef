//! Block-scoped bindings.
//!
//! [`let_in!`](crate::let_in) is the foundation the other constructs expand
//! to: a block expression whose leading `let` statements are visible to the
//! body and to nothing else.

/// Introduce bindings for exactly one following block.
///
/// Each binding is written `let [mut] name [: Type] = expr` and may carry
/// outer attributes. The invocation is an expression evaluating to the body.
///
/// The body's value is moved out before the bindings are dropped, so a body
/// that ends in a borrow of one of them, such as `cell.borrow().len()`,
/// compiles the same as it would without the block.
///
/// ```
/// let total = umbra::let_in!(let mut acc = 0u32, let step: u32 = 3 => {
///     for _ in 0..4 {
///         acc += step;
///     }
///     acc
/// });
/// assert_eq!(total, 12);
/// ```
///
/// The names do not exist after the block:
///
/// ```compile_fail,E0425
/// umbra::let_in!(let inner = 1 => {
///     assert_eq!(inner, 1);
/// });
/// println!("{inner}");
/// ```
#[macro_export]
macro_rules! let_in {
    (
        $($(#[$attr:meta])* let $($binding:ident)+ $(: $ty:ty)? = $init:expr),+ $(,)?
        => $body:block
    ) => {{
        $(
            $(#[$attr])*
            let $($binding)+ $(: $ty)? = $init;
        )+
        #[allow(clippy::let_and_return)]
        let let_in_value = $body;
        let_in_value
    }};
}

/// Bind `name` to a shared reference to a hidden temporary of type `Type`,
/// initialized from `expr`, for one block.
///
/// The initializer may read the outer `name`; the temporary lives exactly as
/// long as the block. `rebind!(mut name: Type = expr => ..)` binds `&mut`
/// instead.
///
/// ```
/// let width = 7u8;
/// let area = umbra::rebind!(width: u64 = width.into() => {
///     let width: &u64 = width;
///     *width * 1_000_000_000
/// });
/// assert_eq!(area, 7_000_000_000);
/// assert_eq!(width, 7u8);
///
/// let words = vec!["b", "a"];
/// let sorted = umbra::rebind!(mut words: Vec<&str> = words.clone() => {
///     words.sort_unstable();
///     words.join(",")
/// });
/// assert_eq!(sorted, "a,b");
/// assert_eq!(words, ["b", "a"]);
/// ```
#[macro_export]
macro_rules! rebind {
    (mut $name:ident : $ty:ty = $init:expr => $body:block) => {{
        let mut rebound: $ty = $init;
        $crate::shadow!(let $name = &mut rebound => $body)
    }};
    ($name:ident : $ty:ty = $init:expr => $body:block) => {{
        let rebound: $ty = $init;
        $crate::shadow!(let $name = &rebound => $body)
    }};
}
