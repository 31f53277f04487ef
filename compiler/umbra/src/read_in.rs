//! Read-in bindings: copy cheap referents, borrow the rest.
//!
//! Generic code usually takes inputs as `&T` so callers never pay for a copy
//! they did not ask for, and so type deduction at the call site is not
//! affected by how expensive `T` happens to be. Inside the function, though,
//! a reference to a small `Copy` value is pure overhead: loads through it
//! cannot be assumed stable across calls, and the value cannot live in a
//! register. [`read_in!`](crate::read_in) rebinds such parameters for one
//! block to a [`ReadIn`], which holds either a copy or the original
//! reference as the active [`BindingModePolicy`] decides. The signature of
//! the enclosing function does not change.
//!
//! Whether the referent is `Copy` is resolved where the macro expands. For a
//! concrete type this is the type's own `Copy` impl; inside a generic
//! function it is whether the function's bounds prove `T: Copy`. A
//! `fn f<T>(x: &T)` without that bound always keeps the reference.

use std::ops::Deref;

use crate::policy::{BindingMode, BindingModePolicy, TypeDescriptor};

/// A block-local view of a referent: either a copy or a shared reference.
///
/// Both variants dereference to `T`, so the body of a read-in block reads the
/// value the same way whichever representation the policy picked.
#[derive(Copy, Clone, Debug)]
pub enum ReadIn<'a, T> {
    Value(T),
    Ref(&'a T),
}

impl<'a, T: Copy> ReadIn<'a, T> {
    /// Copy or borrow `source` as `P` decides for `T`.
    pub fn with_policy<P: BindingModePolicy>(source: &'a T) -> Self {
        match P::mode(TypeDescriptor::of_copy::<T>()) {
            BindingMode::Value => ReadIn::Value(*source),
            BindingMode::SharedRef => ReadIn::Ref(source),
        }
    }
}

impl<'a, T> ReadIn<'a, T> {
    /// Borrow `source` whatever its type.
    pub fn aliased(source: &'a T) -> Self {
        ReadIn::Ref(source)
    }

    /// Which representation the policy picked.
    pub fn mode(&self) -> BindingMode {
        match self {
            ReadIn::Value(_) => BindingMode::Value,
            ReadIn::Ref(_) => BindingMode::SharedRef,
        }
    }

    /// Shorthand for `self.mode() == BindingMode::Value`.
    pub fn is_value(&self) -> bool {
        matches!(self, ReadIn::Value(_))
    }

    /// The block's own copy, if there is one. Writes through it never reach
    /// the original.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            ReadIn::Value(value) => Some(value),
            ReadIn::Ref(_) => None,
        }
    }
}

impl<T> Deref for ReadIn<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            ReadIn::Value(value) => value,
            ReadIn::Ref(source) => source,
        }
    }
}

/// Receiver used by `read_in!` to pick a constructor by method resolution.
///
/// `(&Probe(r)).read_in::<P>()` finds [`ReadInCopy`] first, whose impl
/// applies only when `T: Copy` holds at the call site; otherwise resolution
/// falls through to the auto-referenced [`ReadInAlias`] impl.
#[doc(hidden)]
pub struct Probe<'a, T>(pub &'a T);

#[doc(hidden)]
pub trait ReadInCopy<'a, T> {
    fn read_in<P: BindingModePolicy>(&self) -> ReadIn<'a, T>;
}

impl<'a, T: Copy> ReadInCopy<'a, T> for Probe<'a, T> {
    fn read_in<P: BindingModePolicy>(&self) -> ReadIn<'a, T> {
        ReadIn::with_policy::<P>(self.0)
    }
}

#[doc(hidden)]
pub trait ReadInAlias<'a, T> {
    fn read_in<P: BindingModePolicy>(&self) -> ReadIn<'a, T>;
}

impl<'a, T> ReadInAlias<'a, T> for &Probe<'a, T> {
    fn read_in<P: BindingModePolicy>(&self) -> ReadIn<'a, T> {
        ReadIn::aliased(self.0)
    }
}

/// Rebind reference-typed names to [`ReadIn`] views for one block.
///
/// Each name must be bound to `&T` or `&mut T` with `T: Sized`; a `&mut T`
/// is reborrowed as shared for the duration of the block. The policy is
/// [`DefaultPolicy`](crate::DefaultPolicy) unless one is given with
/// `policy = Path;`.
///
/// ```
/// #[derive(Clone, Copy)]
/// struct Rgb(u8, u8, u8);
///
/// fn brightness(color: &Rgb, weights: &[f32; 3]) -> f32 {
///     umbra::read_in!(color, weights => {
///         assert!(color.is_value());
///         f32::from(color.0) * weights[0]
///             + f32::from(color.1) * weights[1]
///             + f32::from(color.2) * weights[2]
///     })
/// }
///
/// assert!((brightness(&Rgb(10, 0, 0), &[0.5, 0.25, 0.25]) - 5.0).abs() < f32::EPSILON);
/// ```
///
/// With a project-specific policy:
///
/// ```
/// use umbra::{BindingMode, BindingModePolicy, TypeDescriptor};
///
/// struct CopyUpTo64;
///
/// impl BindingModePolicy for CopyUpTo64 {
///     fn mode(ty: TypeDescriptor) -> BindingMode {
///         umbra::decide_with_limit(ty, 64)
///     }
/// }
///
/// let block = [7u64; 8];
/// let block_ref = &block;
/// umbra::read_in!(policy = CopyUpTo64; block_ref => {
///     assert!(block_ref.is_value());
/// });
/// ```
///
/// There is no global policy setting. To use one policy across a project,
/// wrap the macro with the policy fixed and call the wrapper everywhere:
///
/// ```
/// # use umbra::{BindingMode, BindingModePolicy, TypeDescriptor};
/// # struct CopyUpTo64;
/// # impl BindingModePolicy for CopyUpTo64 {
/// #     fn mode(ty: TypeDescriptor) -> BindingMode {
/// #         umbra::decide_with_limit(ty, 64)
/// #     }
/// # }
/// macro_rules! read_in {
///     ($($name:ident),+ => $body:block) => {
///         umbra::read_in!(policy = CopyUpTo64; $($name),+ => $body)
///     };
/// }
///
/// let block = [7u64; 8];
/// let block_ref = &block;
/// assert!(read_in!(block_ref => { block_ref.is_value() }));
/// ```
///
/// The attribute form cannot be wrapped this way and takes
/// `policy = Path` on each function.
#[macro_export]
macro_rules! read_in {
    (policy = $policy:path; $($name:ident),+ $(,)? => $body:block) => {{
        #[allow(unused_imports)]
        use $crate::__private::{ReadInAlias as _, ReadInCopy as _};
        $crate::shadow!(
            $(let $name = (&$crate::__private::Probe(&*$name)).read_in::<$policy>()),+
            => $body
        )
    }};
    ($($name:ident),+ $(,)? => $body:block) => {
        $crate::read_in!(policy = $crate::DefaultPolicy; $($name),+ => $body)
    };
}
