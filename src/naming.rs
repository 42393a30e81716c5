//! The naming policy.
//!
//! Several naming strategies compete for each constant's wire token: an explicit
//! per-constant override, the host type's custom display string, and the declared
//! identifier with or without lower-casing. This module fixes their precedence in
//! one place so every table in the crate resolves names identically.

use crate::{constant::ConstantInfo, options::NamingOptions, token::SerializedToken};

/// Computes the wire token for one constant.
///
/// Precedence, highest first:
///
/// 1. An explicit per-constant override - used verbatim, bypassing all other rules
/// 2. The custom display string - when [`NamingOptions::WRITE_USING_DISPLAY`] is
///    set and the constant carries one; otherwise falls through
/// 3. The declared name lower-cased (ASCII range only) - when
///    [`NamingOptions::LOWERCASE_TOKENS`] is set
/// 4. The declared name unchanged
///
/// With both flags set, a present display string wins and is NOT re-lowercased;
/// lower-casing applies only to the declared-name path. Every constant yields a
/// token, so this function is total.
///
/// # Examples
///
/// ```rust
/// use enumwire::{naming::token_for, ConstantInfo, NamingOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Unit { Meters }
///
/// let info = ConstantInfo::new(Unit::Meters, "Meters").with_display("m");
///
/// assert_eq!(token_for(&info, NamingOptions::empty()), "Meters");
/// assert_eq!(token_for(&info, NamingOptions::WRITE_USING_DISPLAY), "m");
/// assert_eq!(token_for(&info, NamingOptions::LOWERCASE_TOKENS), "meters");
/// ```
#[must_use]
pub fn token_for<E: Copy>(constant: &ConstantInfo<E>, options: NamingOptions) -> SerializedToken {
    if let Some(name) = constant.override_name() {
        return SerializedToken::from(name);
    }

    if options.contains(NamingOptions::WRITE_USING_DISPLAY) {
        if let Some(display) = constant.display() {
            return SerializedToken::from(display);
        }
    }

    if options.contains(NamingOptions::LOWERCASE_TOKENS) {
        return SerializedToken::from(constant.name().to_ascii_lowercase());
    }

    SerializedToken::from(constant.name())
}
