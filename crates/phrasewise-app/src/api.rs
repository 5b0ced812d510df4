//! Frontend-facing request/response DTOs.
//!
//! Stateless surface for frontends that do not hold a
//! [`GeneratorState`](crate::state::GeneratorState): one request in, one
//! passphrase out. Field names are camelCase to match the UI control
//! state; every field is optional with the initial control defaults.

use serde::{Deserialize, Serialize};

use phrasewise_core::{generate, GenerationConfig, GeneratorError, IndexSource};

/// Frontend request DTO for passphrase generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePassphraseRequest {
    /// Target length (default: 12).
    pub target_length: Option<usize>,
    /// Append a number token (default: true).
    pub include_numbers: Option<bool>,
    /// Append a symbol token (default: true).
    pub include_symbols: Option<bool>,
    /// Draw from the special word bank (default: false).
    pub use_special_words: Option<bool>,
}

impl GeneratePassphraseRequest {
    /// Resolve the optional fields against the UI defaults.
    #[must_use]
    pub fn into_config(self) -> GenerationConfig {
        let defaults = GenerationConfig::default();
        GenerationConfig {
            target_length: self.target_length.unwrap_or(defaults.target_length),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            use_special_words: self.use_special_words.unwrap_or(defaults.use_special_words),
        }
    }
}

/// Result DTO returned to the frontend.
///
/// `Debug` is manually implemented to mask the generated value and
/// prevent accidental logging of secret material.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePassphraseResult {
    /// The generated passphrase.
    pub value: String,
}

impl std::fmt::Debug for GeneratePassphraseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratePassphraseResult")
            .field("value", &"***")
            .finish()
    }
}

/// Generate one passphrase from a frontend request.
///
/// # Errors
///
/// Returns [`GeneratorError::Generation`] if the resolved target length
/// is out of range.
pub fn generate_passphrase<R: IndexSource>(
    request: GeneratePassphraseRequest,
    rng: &mut R,
) -> Result<GeneratePassphraseResult, GeneratorError> {
    let value = generate(&request.into_config(), rng)?;
    Ok(GeneratePassphraseResult { value })
}
