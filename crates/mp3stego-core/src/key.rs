use std::fmt::{self, Debug, Formatter};

/// Key shared by the keyed position mode and the substitution cipher.
///
/// An empty string counts as no key at all.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Key(Option<String>);

impl Key {
    /// The key text, `None` if unset or empty
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref().filter(|k| !k.is_empty())
    }

    pub fn is_set(&self) -> bool {
        self.as_str().is_some()
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(key) = &self.0 {
            write!(f, "Key({})", "*".repeat(key.len()))
        } else {
            write!(f, "Key(None)")
        }
    }
}

impl From<Option<String>> for Key {
    fn from(key: Option<String>) -> Self {
        Self(key)
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self(Some(key))
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(Some(key.to_string()))
    }
}
