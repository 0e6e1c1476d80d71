use crate::errors::AppError;
use crate::models::KeyPhraseDocument;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

/// Batch key-phrase extraction. Returns one result per input, in input order.
#[async_trait]
pub trait KeyPhraseProvider: Send + Sync {
    async fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<KeyPhraseDocument>, AppError>;
}

pub struct KeyPhraseAnalyzer {
    provider: Arc<dyn KeyPhraseProvider>,
}

impl KeyPhraseAnalyzer {
    pub fn new(provider: Arc<dyn KeyPhraseProvider>) -> Self {
        Self { provider }
    }

    /// Key phrases for each document the provider did not mark as errored.
    ///
    /// Errored documents are dropped, so the output can be shorter than the
    /// input and positions no longer line up with it. Use
    /// [`KeyPhraseAnalyzer::extract_indexed`] when that matters.
    pub async fn extract_key_phrases(
        &self,
        documents: &[String],
    ) -> Result<Vec<Vec<String>>, AppError> {
        Ok(self
            .extract_indexed(documents)
            .await?
            .into_iter()
            .map(|(_, phrases)| phrases)
            .collect())
    }

    /// Same as [`KeyPhraseAnalyzer::extract_key_phrases`] but each list keeps
    /// the index of the input it came from.
    pub async fn extract_indexed(
        &self,
        documents: &[String],
    ) -> Result<Vec<(usize, Vec<String>)>, AppError> {
        let results = self.provider.extract_key_phrases(documents).await?;

        Ok(results
            .into_iter()
            .enumerate()
            .filter_map(|(index, result)| {
                if result.is_error {
                    warn!("Key phrase extraction failed for document {}", index);
                    None
                } else {
                    Some((index, result.key_phrases))
                }
            })
            .collect())
    }
}
