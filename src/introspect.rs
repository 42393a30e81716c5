//! Introspection bridge for `strum`-derived enums.
//!
//! Table construction consumes an ordered [`ConstantInfo`] sequence that some
//! introspection layer must produce. For enums carrying the usual `strum`
//! derives (`EnumIter` for iteration order, `IntoStaticStr` for declared names)
//! that layer is mechanical; the helpers here spell it out so callers only
//! hand-build sequences when they attach per-constant overrides or exotic
//! metadata.
//!
//! Iteration order of `EnumIter` is declaration order, which is exactly the
//! ordinal order the resolvers require.

use std::fmt::Display;

use strum::IntoEnumIterator;

use crate::constant::ConstantInfo;

/// Derives the declared-constant sequence of `E` from its `strum` introspection.
///
/// Names come from the `IntoStaticStr` derive; no display strings or overrides
/// are attached. Chain [`ConstantInfo::with_override`] on individual entries for
/// per-constant renames.
#[must_use]
pub fn declared_constants<E>() -> Vec<ConstantInfo<E>>
where
    E: IntoEnumIterator + Into<&'static str> + Copy,
{
    E::iter()
        .map(|value| {
            let name: &'static str = value.into();
            ConstantInfo::new(value, name)
        })
        .collect()
}

/// Like [`declared_constants`], additionally capturing each constant's `Display`
/// output as its custom textual representation.
///
/// Use this when the host type overrides its own textual form and the
/// configuration may select [`crate::NamingOptions::WRITE_USING_DISPLAY`].
#[must_use]
pub fn displayed_constants<E>() -> Vec<ConstantInfo<E>>
where
    E: IntoEnumIterator + Into<&'static str> + Copy + Display,
{
    E::iter()
        .map(|value| {
            let name: &'static str = value.into();
            ConstantInfo::new(value, name).with_display(value.to_string())
        })
        .collect()
}
