use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can
/// potentially return.
///
/// Only two situations are errors at all: a malformed declared-constant sequence at
/// construction time, and an encode-side lookup with a constant the table was never
/// built from. Decode-side misses (out-of-range indices, unknown names) are routine
/// and surface as `None` from [`crate::EnumResolver`], never through this type.
///
/// # Examples
///
/// ```rust
/// use enumwire::{ConstantInfo, EnumValues, Error, NamingOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Flag { On }
///
/// let twice = [
///     ConstantInfo::new(Flag::On, "On"),
///     ConstantInfo::new(Flag::On, "On"),
/// ];
/// match EnumValues::construct(&twice, NamingOptions::empty()) {
///     Err(Error::DuplicateConstant { name }) => assert_eq!(name, "On"),
///     other => panic!("expected duplicate-constant error, got {:?}", other.map(|_| ())),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The declared-constant sequence contained the same constant twice.
    ///
    /// The input to table construction must list each constant of the host type
    /// exactly once, in declaration order. A repeated entry is a configuration
    /// error on the caller's side and is reported eagerly, before any table is
    /// handed out.
    ///
    /// # Fields
    ///
    /// * `name` - Declared name of the constant that appeared more than once
    #[error("Duplicate constant `{name}` in declared sequence")]
    DuplicateConstant {
        /// The declared name of the repeated constant
        name: String,
    },

    /// An encode-side lookup used a constant the table was not built from.
    ///
    /// [`crate::EnumValues::serialized_value_for`] holds exactly the constants of
    /// its construction sequence. With the host type statically known this cannot
    /// occur, but the contract is defined for defensive callers that mix tables
    /// across types or configurations.
    #[error("Constant is not a member of enumeration `{type_name}`")]
    NotAMember {
        /// Name of the host enumerated type the lookup was attempted against
        type_name: &'static str,
    },

    /// Generic error for miscellaneous failures.
    ///
    /// Used for errors that don't fit into other categories, such as a registry
    /// entry that cannot be brought back to its concrete table type.
    #[error("{0}")]
    Error(String),
}
