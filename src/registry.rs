//! Process-wide memoization of constructed lookup tables.
//!
//! Constructing a value cache or resolver is O(N) and cheap, but a serialization
//! layer asks for the same table on every value it touches. [`TableRegistry`] is
//! the concurrent memoizing map that deduplicates those requests: one table per
//! `(enumerated type, options, mode)`, built on first use and shared as an `Arc`
//! thereafter.
//!
//! # Registry Architecture
//!
//! Entries are keyed by the host type's [`TypeId`] plus the naming snapshot, so
//! the same enum cached under different options yields distinct, independently
//! immutable tables. Values and resolvers live in separate maps because their
//! key shapes differ (resolvers additionally carry their construction mode).
//!
//! # Thread Safety
//!
//! - Concurrent hash maps for storage (`DashMap`)
//! - Lookups never block construction of unrelated entries
//! - When two callers race to build the same table, both build, one instance
//!   survives in the map, and the loser's work is discarded - callers always
//!   observe a single shared instance afterwards
//! - Construction errors are not cached; a failing supplier surfaces its error
//!   and leaves no entry behind
//!
//! # Examples
//!
//! ```rust
//! use enumwire::{registry, ConstantInfo, NamingOptions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Mode { Read, Write }
//!
//! fn constants() -> Vec<ConstantInfo<Mode>> {
//!     vec![
//!         ConstantInfo::new(Mode::Read, "Read"),
//!         ConstantInfo::new(Mode::Write, "Write"),
//!     ]
//! }
//!
//! let values = registry::global().values_for(NamingOptions::empty(), constants)?;
//! let again = registry::global().values_for(NamingOptions::empty(), constants)?;
//! assert!(std::sync::Arc::ptr_eq(&values, &again));
//! # Ok::<(), enumwire::Error>(())
//! ```

use std::any::{Any, TypeId};
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::{
    constant::ConstantInfo,
    options::NamingOptions,
    resolver::{EnumResolver, ResolverMode},
    values::EnumValues,
    Error, Result,
};

/// Type-erased shared table; the key's [`TypeId`] identifies the concrete type
type SharedTable = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ValuesKey {
    type_id: TypeId,
    options: NamingOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ResolverKey {
    type_id: TypeId,
    options: NamingOptions,
    mode: ResolverMode,
}

/// Concurrent memoizing map of value caches and resolvers.
///
/// One instance usually serves the whole process (see [`global`]); independent
/// instances can be created for isolated lifetimes such as tests or plugins.
/// Dropping a registry drops its tables once the last outstanding `Arc` goes.
pub struct TableRegistry {
    values: DashMap<ValuesKey, SharedTable>,
    resolvers: DashMap<ResolverKey, SharedTable>,
}

impl TableRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        TableRegistry {
            values: DashMap::new(),
            resolvers: DashMap::new(),
        }
    }

    /// Returns the shared value cache for `E` under `options`, building it on first use.
    ///
    /// # Arguments
    /// * `options` - The naming flags snapshot identifying (and configuring) the table
    /// * `supply` - Produces the declared-constant sequence; only called on a miss
    ///
    /// # Errors
    /// Propagates [`Error::DuplicateConstant`] from construction; the failed
    /// entry is not cached, so a later call with a corrected supplier succeeds.
    pub fn values_for<E, F>(&self, options: NamingOptions, supply: F) -> Result<Arc<EnumValues<E>>>
    where
        E: Copy + Eq + Hash + Send + Sync + 'static,
        F: FnOnce() -> Vec<ConstantInfo<E>>,
    {
        let key = ValuesKey {
            type_id: TypeId::of::<E>(),
            options,
        };

        if let Some(entry) = self.values.get(&key) {
            return downcast(Arc::clone(entry.value()));
        }

        let built: SharedTable = Arc::new(EnumValues::construct(&supply(), options)?);
        let shared = Arc::clone(self.values.entry(key).or_insert(built).value());
        downcast(shared)
    }

    /// Returns the shared resolver for `E` under `options` and `mode`, building it on first use.
    ///
    /// # Arguments
    /// * `options` - The naming flags snapshot identifying (and configuring) the table
    /// * `mode` - Which naming variant feeds the resolver's name table
    /// * `supply` - Produces the declared-constant sequence; only called on a miss
    ///
    /// # Errors
    /// Propagates [`Error::DuplicateConstant`] from construction; the failed
    /// entry is not cached.
    pub fn resolver_for<E, F>(
        &self,
        options: NamingOptions,
        mode: ResolverMode,
        supply: F,
    ) -> Result<Arc<EnumResolver<E>>>
    where
        E: Copy + Eq + Hash + Send + Sync + 'static,
        F: FnOnce() -> Vec<ConstantInfo<E>>,
    {
        let key = ResolverKey {
            type_id: TypeId::of::<E>(),
            options,
            mode,
        };

        if let Some(entry) = self.resolvers.get(&key) {
            return downcast(Arc::clone(entry.value()));
        }

        let constants = supply();
        let resolver = match mode {
            ResolverMode::DeclaredName => EnumResolver::construct_from_name(&constants, options)?,
            ResolverMode::Display => EnumResolver::construct_using_display(&constants, options)?,
        };

        let built: SharedTable = Arc::new(resolver);
        let shared = Arc::clone(self.resolvers.entry(key).or_insert(built).value());
        downcast(shared)
    }

    /// Returns the number of cached tables across both maps
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len() + self.resolvers.len()
    }

    /// Returns true if nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.resolvers.is_empty()
    }

    /// Evicts every cached table.
    ///
    /// Outstanding `Arc` handles stay valid; later requests rebuild.
    pub fn clear(&self) {
        self.values.clear();
        self.resolvers.clear();
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<T: Send + Sync + 'static>(table: SharedTable) -> Result<Arc<T>> {
    table
        .downcast::<T>()
        .map_err(|_| Error::Error("registry entry does not match the type of its key".to_string()))
}

static SHARED: OnceLock<TableRegistry> = OnceLock::new();

/// Returns the process-wide registry instance
#[must_use]
pub fn global() -> &'static TableRegistry {
    SHARED.get_or_init(TableRegistry::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Color {
        Red,
        Green,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Shape {
        Circle,
    }

    fn colors() -> Vec<ConstantInfo<Color>> {
        vec![
            ConstantInfo::new(Color::Red, "Red"),
            ConstantInfo::new(Color::Green, "Green"),
        ]
    }

    fn shapes() -> Vec<ConstantInfo<Shape>> {
        vec![ConstantInfo::new(Shape::Circle, "Circle")]
    }

    #[test]
    fn test_values_memoized() {
        let registry = TableRegistry::new();
        let first = registry.values_for(NamingOptions::empty(), colors).unwrap();
        let second = registry.values_for(NamingOptions::empty(), colors).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_supplier_not_called_on_hit() {
        let registry = TableRegistry::new();
        registry.values_for(NamingOptions::empty(), colors).unwrap();
        let hit = registry
            .values_for(NamingOptions::empty(), || -> Vec<ConstantInfo<Color>> {
                panic!("supplier must not run on a cache hit")
            })
            .unwrap();
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn test_distinct_options_distinct_tables() {
        let registry = TableRegistry::new();
        let plain = registry.values_for(NamingOptions::empty(), colors).unwrap();
        let lower = registry
            .values_for(NamingOptions::LOWERCASE_TOKENS, colors)
            .unwrap();
        assert!(!Arc::ptr_eq(&plain, &lower));
        assert_eq!(plain.serialized_value_for(Color::Red).unwrap(), "Red");
        assert_eq!(lower.serialized_value_for(Color::Red).unwrap(), "red");
    }

    #[test]
    fn test_distinct_types_do_not_collide() {
        let registry = TableRegistry::new();
        let colors_table = registry.values_for(NamingOptions::empty(), colors).unwrap();
        let shapes_table = registry.values_for(NamingOptions::empty(), shapes).unwrap();
        assert_eq!(colors_table.len(), 2);
        assert_eq!(shapes_table.len(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resolver_keyed_by_mode() {
        let registry = TableRegistry::new();
        let by_name = registry
            .resolver_for(NamingOptions::empty(), ResolverMode::DeclaredName, colors)
            .unwrap();
        let by_display = registry
            .resolver_for(NamingOptions::empty(), ResolverMode::Display, colors)
            .unwrap();
        assert!(!Arc::ptr_eq(&by_name, &by_display));

        let again = registry
            .resolver_for(NamingOptions::empty(), ResolverMode::DeclaredName, colors)
            .unwrap();
        assert!(Arc::ptr_eq(&by_name, &again));
    }

    #[test]
    fn test_construction_error_not_cached() {
        let registry = TableRegistry::new();
        let bad = registry.values_for(NamingOptions::empty(), || {
            vec![
                ConstantInfo::new(Color::Red, "Red"),
                ConstantInfo::new(Color::Red, "Red"),
            ]
        });
        assert!(bad.is_err());
        assert!(registry.is_empty());

        let good = registry.values_for(NamingOptions::empty(), colors).unwrap();
        assert_eq!(good.len(), 2);
    }

    #[test]
    fn test_clear_evicts_but_handles_survive() {
        let registry = TableRegistry::new();
        let table = registry.values_for(NamingOptions::empty(), colors).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(table.serialized_value_for(Color::Green).unwrap(), "Green");

        let rebuilt = registry.values_for(NamingOptions::empty(), colors).unwrap();
        assert!(!Arc::ptr_eq(&table, &rebuilt));
    }

    #[test]
    fn test_concurrent_requests_share_one_table() {
        let registry = Arc::new(TableRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                registry.values_for(NamingOptions::empty(), colors).unwrap()
            }));
        }

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for table in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], table));
        }
    }

    #[test]
    fn test_global_is_shared() {
        let first = global();
        let second = global();
        assert!(std::ptr::eq(first, second));
    }
}
