//! Improvement suggestions from an external text-generation capability.

mod client;
pub mod gemini;
mod provider;
mod request;

pub use client::{SuggestionClient, SuggestionFetchError, SuggestionPayload};
pub use gemini::GeminiProvider;
pub use provider::{ProviderError, SuggestionProvider, UnconfiguredProvider};
pub use request::SuggestionRequest;
