//! Per-constant wire metadata.
//!
//! A [`ConstantInfo`] bundles everything the naming policy needs to know about one
//! declared constant: the in-memory value, the identifier it was declared with, an
//! optional custom display string, and an optional explicit serialized-name
//! override. Sequences of these are produced ahead of time by the host type's
//! introspection layer (see [`crate::introspect`] for the `strum`-backed bridge)
//! and consumed by [`crate::EnumValues`] and [`crate::EnumResolver`] construction.

/// Wire metadata for one declared constant of an enumerated type.
///
/// The sequence handed to table construction must be in declaration order: the
/// position of an entry is the constant's ordinal. Duplicate constant values in
/// one sequence are a configuration error reported at construction time.
///
/// # Examples
///
/// ```rust
/// use enumwire::ConstantInfo;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Level { Info, Warn }
///
/// let plain = ConstantInfo::new(Level::Info, "Info");
/// assert_eq!(plain.name(), "Info");
/// assert_eq!(plain.display(), None);
///
/// let renamed = ConstantInfo::new(Level::Warn, "Warn")
///     .with_display("warning")
///     .with_override("WRN");
/// assert_eq!(renamed.display(), Some("warning"));
/// assert_eq!(renamed.override_name(), Some("WRN"));
/// ```
#[derive(Debug, Clone)]
pub struct ConstantInfo<E> {
    value: E,
    name: String,
    display: Option<String>,
    rename: Option<String>,
}

impl<E: Copy> ConstantInfo<E> {
    /// Creates the metadata bundle for one constant from its declared identifier
    ///
    /// # Arguments
    /// * `value` - The in-memory constant
    /// * `name` - The identifier the constant was declared with
    #[must_use]
    pub fn new(value: E, name: impl Into<String>) -> Self {
        ConstantInfo {
            value,
            name: name.into(),
            display: None,
            rename: None,
        }
    }

    /// Attaches the host type's custom textual representation for this constant
    ///
    /// Consulted by the naming policy only when
    /// [`crate::NamingOptions::WRITE_USING_DISPLAY`] is selected.
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Attaches an explicit serialized-name override for this constant
    ///
    /// An override is used verbatim and beats every other naming rule.
    #[must_use]
    pub fn with_override(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Returns the in-memory constant
    #[must_use]
    pub fn value(&self) -> E {
        self.value
    }

    /// Returns the declared identifier
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the custom display string, if the host type carries one
    #[must_use]
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Returns the explicit serialized-name override, if one is attached
    #[must_use]
    pub fn override_name(&self) -> Option<&str> {
        self.rename.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Sample {
        First,
    }

    #[test]
    fn test_constant_plain() {
        let info = ConstantInfo::new(Sample::First, "First");
        assert_eq!(info.value(), Sample::First);
        assert_eq!(info.name(), "First");
        assert_eq!(info.display(), None);
        assert_eq!(info.override_name(), None);
    }

    #[test]
    fn test_constant_with_metadata() {
        let info = ConstantInfo::new(Sample::First, "First")
            .with_display("first!")
            .with_override("1st");
        assert_eq!(info.name(), "First");
        assert_eq!(info.display(), Some("first!"));
        assert_eq!(info.override_name(), Some("1st"));
    }
}
