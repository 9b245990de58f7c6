use serde::{Deserialize, Serialize};

/// Body areas mentioned in the free-text discomfort answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainFlags {
    pub wrist: bool,
    pub finger: bool,
    pub forearm: bool,
}

impl PainFlags {
    /// Keyword scan of the discomfort description.
    ///
    /// Matching is plain substring containment on the lower-cased text. Any
    /// mention of "none" clears every flag, even alongside other keywords.
    pub fn from_description(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("none") {
            return Self::default();
        }

        Self {
            wrist: text.contains("wrist"),
            // "finger" already covers "fingers"
            finger: text.contains("finger"),
            forearm: text.contains("forearm"),
        }
    }

    pub fn any(&self) -> bool {
        self.wrist || self.finger || self.forearm
    }

    /// Labels of the flagged areas in rule order.
    pub fn areas(&self) -> Vec<&'static str> {
        [
            (self.wrist, "wrist"),
            (self.finger, "finger"),
            (self.forearm, "forearm"),
        ]
        .into_iter()
        .filter_map(|(flagged, label)| flagged.then_some(label))
        .collect()
    }
}
