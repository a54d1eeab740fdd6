// src/translator.rs
use regex::Regex;
use std::sync::LazyLock;
use std::time::Instant;

use crate::errors::{ConvertError, Result};
use crate::models::ConversionResult;
use crate::providers::LlmProvider;

const CONVERSION_INSTRUCTION: &str = "Act as an expert Java to JavaScript code converter. \
Convert the following Java code into idiomatic and modern JavaScript code. \
Do not include any comments or descriptions in the output, only the code itself.";

/// A fence marker, plus its language tag when the tag runs to the end of the line.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)```(?:[\w+#.-]+[ \t]*\r?$)?").unwrap());

const COMMENT_MARKERS: [&str; 3] = ["//", "/*", "*"];

/// Builds the prompt sent to the model: the fixed instruction, then the source verbatim.
pub fn build_prompt(source: &str) -> String {
    format!("{}\n\nJava code:\n{}", CONVERSION_INSTRUCTION, source)
}

/// Strips markdown code fences and comment-only lines from a model reply.
pub fn normalize(text: &str) -> String {
    let unfenced = CODE_FENCE.replace_all(text, "");

    unfenced
        .trim()
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !COMMENT_MARKERS.iter().any(|marker| trimmed.starts_with(marker))
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Turns Java source into JavaScript by way of an [`LlmProvider`].
pub struct Translator<P> {
    provider: P,
}

impl<P: LlmProvider> Translator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs one conversion and returns the normalized code.
    /// Blank input fails before any request is made.
    pub async fn convert(&self, source: &str) -> Result<String> {
        if source.trim().is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let prompt = build_prompt(source);
        let (text, latency_ms) = self.provider.generate(&prompt).await?;
        log::debug!("Model replied with {} bytes in {}ms", text.len(), latency_ms);

        Ok(normalize(&text))
    }

    /// Like [`Translator::convert`] but folds the outcome into a [`ConversionResult`].
    /// `started` is the caller's start time; elapsed seconds are measured from it.
    pub async fn translate(&self, source: &str, started: Instant) -> ConversionResult {
        match self.convert(source).await {
            Ok(code) => ConversionResult::Success {
                code,
                elapsed_seconds: started.elapsed().as_secs_f64(),
            },
            Err(e) => {
                log::error!("Error converting code: {}", e);
                ConversionResult::Failure { message: e.user_message() }
            }
        }
    }
}
