//! Session identifiers.

use std::fmt;

/// An opaque per-visitor session identifier.
///
/// Fresh ids are random UUIDs; ids presented by a browser cookie are
/// accepted verbatim, whatever their shape. An unknown id is never an
/// error, it just names a session that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ids_are_nonempty() {
        assert!(!SessionId::generate().as_str().is_empty());
    }

    #[test]
    fn cookie_values_are_accepted_verbatim() {
        let id = SessionId::from("not-a-uuid-at-all");
        assert_eq!(id.as_str(), "not-a-uuid-at-all");
        assert_eq!(id.to_string(), "not-a-uuid-at-all");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SessionId::from("abc"));
        assert!(set.contains(&SessionId::from("abc")));
        assert!(!set.contains(&SessionId::from("def")));
    }
}
