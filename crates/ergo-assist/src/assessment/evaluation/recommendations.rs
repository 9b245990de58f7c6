use serde::{Deserialize, Serialize};

/// Advisory messages in first-insertion order, unique by exact text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendations(Vec<String>);

impl Recommendations {
    /// Appends `message` unless an identical message is already present.
    /// Returns whether the message was inserted.
    pub fn add(&mut self, message: &str) -> bool {
        if self.contains(message) {
            return false;
        }
        self.0.push(message.to_string());
        true
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|existing| existing == message)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Recommendations {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
