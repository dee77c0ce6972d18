//! Table name prefixing.
//!
//! A connection may carry a prefix that namespaces every table it touches.
//! With prefix `foo` and the default delimiter, table `Bar` lives at `foo.Bar`.

/// Delimiter placed between prefix and table name unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNaming {
    prefix: Option<String>,
    delimiter: String,
}

impl Default for TableNaming {
    fn default() -> Self {
        Self {
            prefix: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl TableNaming {
    /// Creates a naming scheme with the given prefix and the default delimiter.
    ///
    /// An empty prefix behaves as no prefix.
    pub fn new(prefix: Option<String>) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()),
            ..Self::default()
        }
    }

    /// Sets the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the full service-side name for `name`.
    pub fn resolve(&self, name: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{}{name}", self.delimiter),
            None => name.to_string(),
        }
    }

    /// Returns the unprefixed name if `full_name` belongs to this prefix.
    pub fn strip<'a>(&self, full_name: &'a str) -> Option<&'a str> {
        match &self.prefix {
            Some(prefix) => full_name
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(self.delimiter.as_str())),
            None => Some(full_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_prefix() {
        let naming = TableNaming::new(Some("foo".to_string()));
        assert_eq!(naming.resolve("Table"), "foo.Table");
        assert_eq!(naming.resolve("Bar"), "foo.Bar");
    }

    #[test]
    fn test_resolve_without_prefix() {
        assert_eq!(TableNaming::default().resolve("Table"), "Table");
    }

    #[test]
    fn test_empty_prefix_is_no_prefix() {
        let naming = TableNaming::new(Some(String::new()));
        assert_eq!(naming.prefix(), None);
        assert_eq!(naming.resolve("Table"), "Table");
    }

    #[test]
    fn test_custom_delimiter() {
        let naming = TableNaming::new(Some("staging".to_string())).with_delimiter("-");
        assert_eq!(naming.resolve("Users"), "staging-Users");
    }

    #[test]
    fn test_strip_matches_prefix_and_delimiter() {
        let naming = TableNaming::new(Some("foo".to_string()));
        assert_eq!(naming.strip("foo.Table"), Some("Table"));
        assert_eq!(naming.strip("foobar.Table"), None);
        assert_eq!(naming.strip("bar.Table"), None);
        assert_eq!(naming.strip("Table"), None);
    }

    #[test]
    fn test_strip_without_prefix_keeps_name() {
        assert_eq!(TableNaming::default().strip("foo.Table"), Some("foo.Table"));
    }
}
