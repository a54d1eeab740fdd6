// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;

/// A common trait for the model backends that do the actual translation.
pub trait LlmProvider: Send + Sync {
    /// Generates a response from the LLM based on a given prompt.
    ///
    /// # Returns
    /// A `Result` containing a tuple of the candidate text and the latency in milliseconds (`u64`).
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}
