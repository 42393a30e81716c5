//! Decode-side index and name resolution.
//!
//! [`EnumResolver`] maps a wire-supplied integer or name back to the constant it
//! stands for. The ordinal table reflects declaration order regardless of naming
//! mode; only the name-lookup table depends on which naming variant the resolver
//! was constructed with.
//!
//! # Key Components
//!
//! - [`EnumResolver::construct_from_name`] / [`EnumResolver::construct_using_display`] -
//!   The two construction modes, differing only in what feeds the name table
//! - [`EnumResolver::get_by_index`] / [`EnumResolver::get_by_name`] - Total lookups
//!   returning `None` for anything out of range or unknown
//! - [`EnumResolver::last_valid_index`] - Cheap range validation without a lookup
//!
//! # Lookup Policy
//!
//! A decoder routinely sees bad input: an index from a newer schema revision, a
//! name from a different naming convention. Both come back as `None` so the
//! decoder can apply its own unrecognized-value policy (fail the decode,
//! substitute a default, or list the accepted names in a diagnostic). Nothing on
//! this path allocates, panics, or raises.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::{
    constant::ConstantInfo, naming, options::NamingOptions, token::SerializedToken, Error, Result,
};

/// Which naming variant feeds a resolver's name-lookup table.
///
/// The ordinal table is identical in both modes; ordinals reflect declaration
/// order no matter how constants are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverMode {
    /// Names derive from each constant's declared identifier.
    DeclaredName,
    /// Names derive from each constant's custom display string where present.
    Display,
}

/// Wire index/name → constant resolver for one enumerated type.
///
/// Built once from the declared-constant sequence, immutable afterwards, and
/// safe for concurrent readers. An empty sequence is a valid, degenerate state:
/// [`EnumResolver::last_valid_index`] is `-1` and every lookup returns `None`.
///
/// # Examples
///
/// ```rust
/// use enumwire::{ConstantInfo, EnumResolver, NamingOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum State { Idle, Busy }
///
/// let resolver = EnumResolver::construct_from_name(
///     &[
///         ConstantInfo::new(State::Idle, "Idle"),
///         ConstantInfo::new(State::Busy, "Busy"),
///     ],
///     NamingOptions::empty(),
/// )?;
///
/// assert_eq!(resolver.get_by_index(1), Some(State::Busy));
/// assert_eq!(resolver.get_by_index(-1), None);
/// assert_eq!(resolver.get_by_name("Idle"), Some(State::Idle));
/// assert_eq!(resolver.last_valid_index(), 1);
/// # Ok::<(), enumwire::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnumResolver<E> {
    constants: Vec<E>,
    names: Vec<SerializedToken>,
    by_name: HashMap<SerializedToken, E>,
    mode: ResolverMode,
}

impl<E: Copy + Eq + Hash> EnumResolver<E> {
    /// Builds a resolver whose name table derives from declared identifiers.
    ///
    /// Per-constant overrides still win, and the lowercase flag still applies;
    /// only the display-string rule is fixed off for the name table, regardless
    /// of the caller's [`NamingOptions::WRITE_USING_DISPLAY`] bit.
    ///
    /// # Arguments
    /// * `constants` - The declared-constant sequence, in declaration order
    /// * `options` - The naming flags snapshot for this resolver
    ///
    /// # Errors
    /// Returns [`Error::DuplicateConstant`] if the sequence contains the same
    /// constant twice.
    pub fn construct_from_name(
        constants: &[ConstantInfo<E>],
        options: NamingOptions,
    ) -> Result<Self> {
        Self::construct(
            constants,
            options - NamingOptions::WRITE_USING_DISPLAY,
            ResolverMode::DeclaredName,
        )
    }

    /// Builds a resolver whose name table derives from custom display strings.
    ///
    /// Constants without a display string fall back to their declared name, the
    /// same way the naming policy does on the encode side.
    ///
    /// # Arguments
    /// * `constants` - The declared-constant sequence, in declaration order
    /// * `options` - The naming flags snapshot for this resolver
    ///
    /// # Errors
    /// Returns [`Error::DuplicateConstant`] if the sequence contains the same
    /// constant twice.
    pub fn construct_using_display(
        constants: &[ConstantInfo<E>],
        options: NamingOptions,
    ) -> Result<Self> {
        Self::construct(
            constants,
            options | NamingOptions::WRITE_USING_DISPLAY,
            ResolverMode::Display,
        )
    }

    fn construct(
        infos: &[ConstantInfo<E>],
        options: NamingOptions,
        mode: ResolverMode,
    ) -> Result<Self> {
        let mut constants = Vec::with_capacity(infos.len());
        let mut names = Vec::with_capacity(infos.len());
        let mut by_name = HashMap::with_capacity(infos.len());
        let mut seen = HashSet::with_capacity(infos.len());

        for info in infos {
            if !seen.insert(info.value()) {
                return Err(Error::DuplicateConstant {
                    name: info.name().to_string(),
                });
            }

            let token = naming::token_for(info, options);
            // On a name collision the earliest-declared constant keeps the slot.
            by_name.entry(token.clone()).or_insert(info.value());
            names.push(token);
            constants.push(info.value());
        }

        Ok(EnumResolver {
            constants,
            names,
            by_name,
            mode,
        })
    }

    /// Returns the constant at the given wire index.
    ///
    /// `None` for negative indices and for indices beyond
    /// [`EnumResolver::last_valid_index`]; a decoder treats those as
    /// unrecognized wire values rather than crashing.
    ///
    /// # Arguments
    /// * `index` - The wire-supplied ordinal, possibly out of range
    #[must_use]
    pub fn get_by_index(&self, index: i64) -> Option<E> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.constants.get(i).copied())
    }

    /// Returns the constant serialized under the given name.
    ///
    /// The name table reflects this resolver's construction mode; unmatched
    /// names yield `None`.
    ///
    /// # Arguments
    /// * `name` - The wire-supplied token
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<E> {
        self.by_name.get(name).copied()
    }

    /// Returns the last valid wire index, `-1` when no constants are declared
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn last_valid_index(&self) -> i64 {
        self.constants.len() as i64 - 1
    }

    /// Returns all constants in declaration order, indexed by ordinal
    #[must_use]
    pub fn constants(&self) -> &[E] {
        &self.constants
    }

    /// Returns the serialized names in declaration order.
    ///
    /// Useful for diagnostics that list the accepted values next to an
    /// unrecognized wire token.
    pub fn constant_names(&self) -> impl Iterator<Item = &SerializedToken> {
        self.names.iter()
    }

    /// Returns the naming mode this resolver was constructed with
    #[must_use]
    pub fn mode(&self) -> ResolverMode {
        self.mode
    }

    /// Returns the number of declared constants
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns true if no constants are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
