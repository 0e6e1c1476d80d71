use serde::{Deserialize, Serialize};

pub const NO_TITLE: &str = "No title";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_KEYWORDS: &str = "No keywords";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MetadataBundle {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl MetadataBundle {
    /// The three strings sent for key-phrase extraction, in fixed order.
    pub fn documents(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.description.clone(),
            self.keywords.clone(),
        ]
    }
}

impl Default for MetadataBundle {
    fn default() -> Self {
        MetadataBundle {
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            keywords: NO_KEYWORDS.to_string(),
        }
    }
}

// One per-document result from the phrase-extraction provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct KeyPhraseDocument {
    pub key_phrases: Vec<String>,
    pub is_error: bool,
}
