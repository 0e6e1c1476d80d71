pub mod openai;
pub mod provider;
pub mod synthesizer;

pub use openai::OpenAIClient;
pub use provider::{ChatMessage, SamplingParams, TextGenerator};
pub use synthesizer::{render_prompt, RecommendationSynthesizer};
