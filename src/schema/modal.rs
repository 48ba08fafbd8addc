//! Typestate markers for `optional()` and `nullable()`.
//!
//! Each flag can be applied once: `optional()` only exists on schemas whose
//! presence marker is [`Required`], `nullable()` only on [`NonNull`] ones.

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Whether an absent value is admitted.
pub trait Presence: Sealed + Send + Sync + 'static {
    /// True for [`Optional`].
    const OPTIONAL: bool;
}

/// Whether `null` is admitted.
pub trait Nullability: Sealed + Send + Sync + 'static {
    /// True for [`Nullable`].
    const NULLABLE: bool;
}

/// An absent value fails the type guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

/// An absent value short-circuits to success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Optional;

/// `null` fails the type guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNull;

/// `null` short-circuits to success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nullable;

impl Sealed for Required {}
impl Sealed for Optional {}
impl Sealed for NonNull {}
impl Sealed for Nullable {}

impl Presence for Required {
    const OPTIONAL: bool = false;
}

impl Presence for Optional {
    const OPTIONAL: bool = true;
}

impl Nullability for NonNull {
    const NULLABLE: bool = false;
}

impl Nullability for Nullable {
    const NULLABLE: bool = true;
}
