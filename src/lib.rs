// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # enumwire
//!
//! [![Crates.io](https://img.shields.io/crates/v/enumwire.svg)](https://crates.io/crates/enumwire)
//! [![Documentation](https://docs.rs/enumwire/badge.svg)](https://docs.rs/enumwire)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/enumwire/blob/main/LICENSE-APACHE)
//!
//! Precomputed lookup tables for the enum leg of a serialization layer. `enumwire`
//! translates between an enumerated type's in-memory constants and their wire
//! representation, which is either a string token or an integer index. All naming
//! decisions are made once, at table construction; the encode and decode hot paths
//! are plain hash/array lookups that never allocate and never panic.
//!
//! ## Features
//!
//! - **📦 Build once, share everywhere** - Tables are immutable after construction and safe for concurrent readers
//! - **🔤 Deterministic naming** - Per-constant overrides, display strings, and ASCII lower-casing resolved by a fixed precedence
//! - **🔍 Total decode lookups** - Out-of-range indices and unknown names are `None`, never a panic or error
//! - **⚡ Cheap tokens** - [`SerializedToken`] is a shared `Arc<str>`; cloning copies a pointer
//! - **🧩 Process-wide registry** - A concurrent memoizing map deduplicates table construction per `(type, options, mode)`
//! - **🛡️ Introspection bridge** - Derive constant sequences from `strum`-introspectable enums
//!
//! ## Quick Start
//!
//! Add `enumwire` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! enumwire = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use enumwire::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Compression { None, Gzip, Zstd }
//!
//! let constants = vec![
//!     ConstantInfo::new(Compression::None, "None"),
//!     ConstantInfo::new(Compression::Gzip, "Gzip"),
//!     ConstantInfo::new(Compression::Zstd, "Zstd"),
//! ];
//!
//! let values = EnumValues::construct(&constants, NamingOptions::LOWERCASE_TOKENS)?;
//! assert_eq!(values.serialized_value_for(Compression::Gzip)?.as_str(), "gzip");
//!
//! let resolver = EnumResolver::construct_from_name(&constants, NamingOptions::LOWERCASE_TOKENS)?;
//! assert_eq!(resolver.get_by_name("zstd"), Some(Compression::Zstd));
//! assert_eq!(resolver.get_by_index(7), None);
//! # Ok::<(), enumwire::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `enumwire` is organized into several small modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`constant`] and [`token`] - The per-constant metadata bundle and the shared wire token
//! - [`naming`] and [`options`] - The naming policy and the flags that gate it
//! - [`values`] - The encode-side constant → token cache
//! - [`resolver`] - The decode-side index/name → constant tables
//! - [`registry`] - Concurrent per-process memoization of constructed tables
//! - [`introspect`] - `strum`-backed constant-sequence derivation
//! - [`Error`] and [`Result`] - Error handling
//!
//! ### Encode path
//!
//! The encoding pipeline asks [`EnumValues`] for the token of each constant it
//! writes. Tokens are computed by [`naming::token_for`] during construction, so
//! a flag change never reshuffles an existing table.
//!
//! ### Decode path
//!
//! The decoding pipeline hands wire-supplied integers or names to
//! [`EnumResolver`]. Anything out of range or unknown comes back as `None`,
//! leaving the unrecognized-value policy (fail, default, diagnose) to the caller.

/// Error handling for table construction and encode-side lookups.
pub mod error;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// Per-constant wire metadata supplied by the host type's introspection layer.
pub mod constant;

/// `strum`-backed derivation of declared-constant sequences.
pub mod introspect;

/// The naming policy deciding each constant's wire token.
pub mod naming;

/// Option flags consulted by the naming policy.
pub mod options;

/// Process-wide memoization of constructed lookup tables.
pub mod registry;

/// Decode-side resolution of wire indices and names back to constants.
pub mod resolver;

/// The shared immutable wire token type.
pub mod token;

/// Encode-side cache of each constant's precomputed wire token.
pub mod values;

/// `enumwire` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. Used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `enumwire` Error type
///
/// The main error type for all operations in this crate. Construction reports
/// configuration errors (duplicate constants); encode-side lookups report
/// foreign constants. Decode-side lookup misses are `Option`, not errors.
pub use error::Error;

/// Wire metadata for one declared constant.
///
/// See [`constant::ConstantInfo`] for the builder-style constructors.
pub use constant::ConstantInfo;

/// Flags gating the naming policy's optional rules.
pub use options::NamingOptions;

/// Encode-side constant → token cache.
///
/// # Example
///
/// ```rust
/// use enumwire::{ConstantInfo, EnumValues, NamingOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Side { Buy, Sell }
///
/// let values = EnumValues::construct(
///     &[
///         ConstantInfo::new(Side::Buy, "Buy"),
///         ConstantInfo::new(Side::Sell, "Sell"),
///     ],
///     NamingOptions::empty(),
/// )?;
/// assert_eq!(values.serialized_value_for(Side::Buy)?.as_str(), "Buy");
/// # Ok::<(), enumwire::Error>(())
/// ```
pub use values::EnumValues;

/// Decode-side index/name → constant resolver.
pub use resolver::{EnumResolver, ResolverMode};

/// Shared immutable wire token.
pub use token::SerializedToken;

/// Concurrent memoizing registry of constructed tables.
///
/// See [`registry::TableRegistry`] and [`registry::global`].
pub use registry::TableRegistry;
