pub mod metadata;

pub use metadata::{KeyPhraseDocument, MetadataBundle, NO_DESCRIPTION, NO_KEYWORDS, NO_TITLE};
