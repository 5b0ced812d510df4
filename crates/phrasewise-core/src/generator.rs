//! Passphrase construction.
//!
//! Words from the selected bank are concatenated with no separators until
//! the next draw would overflow the space left after the trailing tokens,
//! then the number and symbol tokens (when enabled) are appended.

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::rng::IndexSource;
use crate::wordbank::{WordBank, WordCategory, REGULAR, SPECIAL};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum allowed target length.
pub const MIN_TARGET_LENGTH: usize = 8;

/// Maximum allowed target length.
pub const MAX_TARGET_LENGTH: usize = 32;

/// Default target length.
pub const DEFAULT_TARGET_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Configuration for one generation call.
///
/// Mirrors the UI control state: a length slider bounded
/// [`MIN_TARGET_LENGTH`]..=[`MAX_TARGET_LENGTH`] and three toggles.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Target passphrase length in characters.
    pub target_length: usize,
    /// Append a random number token.
    pub include_numbers: bool,
    /// Append a random symbol token.
    pub include_symbols: bool,
    /// Draw from the special (meme) bank instead of the regular one.
    pub use_special_words: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            include_numbers: true,
            include_symbols: true,
            use_special_words: false,
        }
    }
}

impl GenerationConfig {
    /// The word bank this configuration selects.
    #[must_use]
    pub const fn bank(&self) -> &'static WordBank {
        if self.use_special_words {
            &SPECIAL
        } else {
            &REGULAR
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate one passphrase.
///
/// The trailing tokens are drawn first so the word budget accounts for
/// their real lengths; the multi-digit numbers of the special bank can
/// therefore never push the result past `target_length`. Words are then
/// drawn (uniform category, uniform word) and appended while they fit;
/// the first overflowing draw is discarded, not retried, so results
/// usually land a few characters under the target and never above it.
///
/// There is no minimum word count: an unlucky draw of a long word can end
/// the loop after zero or one word.
///
/// # Errors
///
/// Returns [`GeneratorError::Generation`] if `config.target_length` is
/// outside [`MIN_TARGET_LENGTH`]..=[`MAX_TARGET_LENGTH`].
pub fn generate<R: IndexSource>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    if !(MIN_TARGET_LENGTH..=MAX_TARGET_LENGTH).contains(&config.target_length) {
        return Err(GeneratorError::Generation(format!(
            "target length must be between {MIN_TARGET_LENGTH} and {MAX_TARGET_LENGTH}, got {}",
            config.target_length
        )));
    }

    let bank = config.bank();

    let number = config.include_numbers.then(|| pick(bank.numbers, rng));
    let symbol = config.include_symbols.then(|| pick(bank.symbols, rng));

    let reserved = number
        .map_or(0, str::len)
        .saturating_add(symbol.map_or(0, str::len));
    let available = config.target_length.saturating_sub(reserved);

    let mut phrase = String::with_capacity(config.target_length);

    // Each iteration either grows the phrase by at least one byte or
    // breaks, so the loop runs at most `target_length` times.
    while phrase.len() < available {
        let category = WordCategory::ALL[rng.next_index(WordCategory::ALL.len())];
        let word = pick(bank.category(category), rng);
        if phrase.len().saturating_add(word.len()) <= available {
            phrase.push_str(word);
        } else {
            break;
        }
    }

    if let Some(token) = number {
        phrase.push_str(token);
    }
    if let Some(token) = symbol {
        phrase.push_str(token);
    }

    Ok(phrase)
}

/// Uniform draw from a token list.
fn pick<R: IndexSource>(tokens: &'static [&'static str], rng: &mut R) -> &'static str {
    tokens[rng.next_index(tokens.len())]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
