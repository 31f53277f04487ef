//! Choosing between a copy and a shared reference.
//!
//! A read-in binding either copies the referent or keeps borrowing it. The
//! choice depends on two static properties of the referent's type, captured
//! in a [`TypeDescriptor`]: whether it is `Copy` (a bit copy with no drop
//! glue) and its size. Small `Copy` types are copied so the optimizer sees a
//! plain value instead of a pointer; everything else stays a reference.
//!
//! The rule is a [`BindingModePolicy`]. Projects with other preferences
//! implement the trait on their own type and pass it to
//! [`read_in!`](crate::read_in) with `policy = Path`.

use std::fmt;
use std::mem;

/// Largest `Copy` type, in bytes, that [`DefaultPolicy`] copies: two
/// pointer widths of the compilation target.
pub const DEFAULT_MAX_BYTES: usize = 2 * mem::size_of::<*const ()>();

/// Static properties of a type that a policy may look at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    trivially_copyable: bool,
    size: usize,
}

impl TypeDescriptor {
    /// Describe a type by hand, e.g. to test a policy.
    pub const fn new(trivially_copyable: bool, size: usize) -> Self {
        Self {
            trivially_copyable,
            size,
        }
    }

    /// Descriptor of a type known to be `Copy`.
    pub const fn of_copy<T: Copy>() -> Self {
        Self::new(true, mem::size_of::<T>())
    }

    /// Descriptor of a type with no known `Copy` impl.
    pub const fn of_opaque<T>() -> Self {
        Self::new(false, mem::size_of::<T>())
    }

    /// Whether a bit copy of the type is a valid, independent value.
    pub const fn is_trivially_copyable(self) -> bool {
        self.trivially_copyable
    }

    /// Size of the type in bytes.
    pub const fn size(self) -> usize {
        self.size
    }
}

/// How a read-in binding holds its referent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingMode {
    /// A copy owned by the block.
    Value,
    /// A shared reference to the original storage.
    SharedRef,
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingMode::Value => write!(f, "by value"),
            BindingMode::SharedRef => write!(f, "by reference"),
        }
    }
}

/// The default rule with the threshold of the current target.
pub const fn decide(ty: TypeDescriptor) -> BindingMode {
    decide_with_limit(ty, DEFAULT_MAX_BYTES)
}

/// Copy `Copy` types of at most `max_bytes`; reference everything else.
pub const fn decide_with_limit(ty: TypeDescriptor, max_bytes: usize) -> BindingMode {
    if ty.trivially_copyable && ty.size <= max_bytes {
        BindingMode::Value
    } else {
        BindingMode::SharedRef
    }
}

/// Customization point for [`read_in!`](crate::read_in).
///
/// Implementations must be total and must depend on the descriptor only.
/// A [`BindingMode::Value`] answer is honoured only for `Copy` types; other
/// types are always borrowed.
pub trait BindingModePolicy {
    fn mode(ty: TypeDescriptor) -> BindingMode;
}

/// The default rule with a fixed threshold of `MAX_BYTES`.
#[derive(Copy, Clone, Debug, Default)]
pub struct SizeLimit<const MAX_BYTES: usize>;

impl<const MAX_BYTES: usize> BindingModePolicy for SizeLimit<MAX_BYTES> {
    fn mode(ty: TypeDescriptor) -> BindingMode {
        decide_with_limit(ty, MAX_BYTES)
    }
}

/// Policy used when `read_in!` is not given one.
pub type DefaultPolicy = SizeLimit<DEFAULT_MAX_BYTES>;

/// Never copies. Turns `read_in!` into a plain reborrow.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysAlias;

impl BindingModePolicy for AlwaysAlias {
    fn mode(_: TypeDescriptor) -> BindingMode {
        BindingMode::SharedRef
    }
}
