//! Encode-side value cache.
//!
//! [`EnumValues`] holds, for each constant of one enumerated type, the token the
//! serialization layer should write for it. All naming decisions happen once, at
//! construction, by running [`crate::naming::token_for`] over the declared
//! sequence; afterwards the cache is immutable and safe to share across threads.
//!
//! # Key Components
//!
//! - [`EnumValues::construct`] - Builds the cache from the declared sequence and an options snapshot
//! - [`EnumValues::serialized_value_for`] - The encode pipeline's per-value lookup
//! - [`EnumValues::values`] - The full token sequence, for "accepted values" checks
//!
//! # Thread Safety
//!
//! The cache performs no interior mutation after construction. Concurrent readers
//! observe one consistent, unchanging table; no locking is involved.

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    constant::ConstantInfo, naming, options::NamingOptions, token::SerializedToken, Error, Result,
};

/// Constant → wire-token cache for one enumerated type.
///
/// Holds exactly one entry per constant of the construction sequence; nothing is
/// added or removed afterwards. Token collisions between constants are legal (two
/// constants may serialize to the same string) and never fail construction - the
/// encode side does not need token uniqueness.
///
/// # Examples
///
/// ```rust
/// use enumwire::{ConstantInfo, EnumValues, NamingOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum State { Idle, Busy }
///
/// let values = EnumValues::construct(
///     &[
///         ConstantInfo::new(State::Idle, "Idle"),
///         ConstantInfo::new(State::Busy, "Busy"),
///     ],
///     NamingOptions::LOWERCASE_TOKENS,
/// )?;
///
/// assert_eq!(values.serialized_value_for(State::Busy)?.as_str(), "busy");
/// assert_eq!(values.values().count(), 2);
/// # Ok::<(), enumwire::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnumValues<E> {
    by_constant: HashMap<E, SerializedToken>,
    ordered: Vec<SerializedToken>,
}

impl<E: Copy + Eq + Hash> EnumValues<E> {
    /// Builds the cache by applying the naming policy to each constant in input order.
    ///
    /// # Arguments
    /// * `constants` - The declared-constant sequence, in declaration order
    /// * `options` - The naming flags snapshot for this cache
    ///
    /// # Errors
    /// Returns [`Error::DuplicateConstant`] if the sequence contains the same
    /// constant twice. An empty sequence is valid and yields an empty cache.
    pub fn construct(constants: &[ConstantInfo<E>], options: NamingOptions) -> Result<Self> {
        let mut by_constant = HashMap::with_capacity(constants.len());
        let mut ordered = Vec::with_capacity(constants.len());

        for info in constants {
            let token = naming::token_for(info, options);
            if by_constant.insert(info.value(), token.clone()).is_some() {
                return Err(Error::DuplicateConstant {
                    name: info.name().to_string(),
                });
            }
            ordered.push(token);
        }

        Ok(EnumValues {
            by_constant,
            ordered,
        })
    }

    /// Returns the wire token precomputed for `constant`.
    ///
    /// # Arguments
    /// * `constant` - A constant of the type this cache was built from
    ///
    /// # Errors
    /// Returns [`Error::NotAMember`] if the constant was not part of the
    /// construction sequence. With the host type statically known this cannot
    /// occur; the contract exists for defensive callers.
    pub fn serialized_value_for(&self, constant: E) -> Result<&SerializedToken> {
        self.by_constant
            .get(&constant)
            .ok_or_else(|| Error::NotAMember {
                type_name: std::any::type_name::<E>(),
            })
    }

    /// Returns all tokens of this cache, in declaration order.
    ///
    /// Useful to a decoder that accepts any one of the serialized forms, or to
    /// diagnostics listing the legal values. The iterator yields one token per
    /// constant, so duplicates appear when constants share a serialized form.
    pub fn values(&self) -> impl Iterator<Item = &SerializedToken> {
        self.ordered.iter()
    }

    /// Borrows the full constant → token map
    #[must_use]
    pub fn internal_map(&self) -> &HashMap<E, SerializedToken> {
        &self.by_constant
    }

    /// Returns the number of constants in this cache
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if this cache was built from an empty sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
