pub mod extract;
pub mod key_phrases;
pub mod text_analytics;

pub use extract::{parse_metadata, MetadataExtractor};
pub use key_phrases::{KeyPhraseAnalyzer, KeyPhraseProvider};
pub use text_analytics::TextAnalyticsClient;
