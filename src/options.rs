use bitflags::bitflags;

bitflags! {
    /// Option flags consulted when computing each constant's wire token.
    ///
    /// The flags gate the optional rules of [`crate::naming::token_for`]; an
    /// explicit per-constant override always wins regardless of what is set here.
    /// An empty set means every constant serializes as its declared identifier.
    ///
    /// Tables snapshot the flags at construction, so changing a configuration
    /// later never reshuffles an existing table; build a new one instead (the
    /// [`crate::registry`] keys its entries by these flags for that reason).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NamingOptions: u8 {
        /// Serialize each constant as its custom display string when it has one.
        ///
        /// Constants without a display string fall through to the remaining rules.
        /// A display string selected by this flag is used as-is, even when
        /// `LOWERCASE_TOKENS` is also set.
        const WRITE_USING_DISPLAY = 1;

        /// Lower-case declared names before writing.
        ///
        /// The transform is locale-independent and limited to the ASCII range;
        /// non-ASCII characters pass through unchanged. Applies only to the
        /// declared-name fallback path, never to overrides or display strings.
        const LOWERCASE_TOKENS = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_is_empty() {
        assert_eq!(NamingOptions::default(), NamingOptions::empty());
        assert!(!NamingOptions::default().contains(NamingOptions::WRITE_USING_DISPLAY));
    }

    #[test]
    fn test_options_combine() {
        let both = NamingOptions::WRITE_USING_DISPLAY | NamingOptions::LOWERCASE_TOKENS;
        assert!(both.contains(NamingOptions::WRITE_USING_DISPLAY));
        assert!(both.contains(NamingOptions::LOWERCASE_TOKENS));
        assert_ne!(both, NamingOptions::WRITE_USING_DISPLAY);
    }
}
