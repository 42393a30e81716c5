//! # enumwire Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the enumwire library. Import this module to get quick access to the
//! essential types for enum wire translation.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all enumwire operations
pub use crate::Error;

/// The result type used throughout enumwire
pub use crate::Result;

// ================================================================================================
// Table Construction Inputs
// ================================================================================================

/// Wire metadata for one declared constant
pub use crate::constant::ConstantInfo;

/// Flags gating the naming policy's optional rules
pub use crate::options::NamingOptions;

/// The shared immutable wire token
pub use crate::token::SerializedToken;

// ================================================================================================
// Lookup Tables
// ================================================================================================

/// Encode-side constant → token cache
pub use crate::values::EnumValues;

/// Decode-side index/name → constant resolver, and its naming mode
pub use crate::resolver::{EnumResolver, ResolverMode};

// ================================================================================================
// Registry and Introspection
// ================================================================================================

/// Concurrent memoizing registry of constructed tables
pub use crate::registry::TableRegistry;

/// `strum`-backed derivation of declared-constant sequences
pub use crate::introspect::{declared_constants, displayed_constants};
