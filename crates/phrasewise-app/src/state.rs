//! Generator state owned by the application shell.
//!
//! Every configuration change produces a fresh passphrase: each mutator
//! regenerates, stores the result, and retains the displaced passphrase
//! as `previous` for display. Displaced values are zeroized before being
//! dropped; passphrase values are never logged.

use zeroize::Zeroize;

use phrasewise_core::{
    generate, GenerationConfig, GeneratorError, IndexSource, MAX_TARGET_LENGTH, MIN_TARGET_LENGTH,
};

use crate::clipboard::{ClipboardSink, CopyAcknowledgment};

/// Current passphrase, previous passphrase, and the configuration that
/// produced them.
pub struct GeneratorState<R: IndexSource> {
    rng: R,
    config: GenerationConfig,
    passphrase: String,
    previous: String,
    copy_ack: Option<CopyAcknowledgment>,
}

impl<R: IndexSource> GeneratorState<R> {
    /// Creates the state and generates the initial passphrase, so a
    /// freshly mounted frontend always has a value to display.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Generation`] if `config.target_length`
    /// is out of range. The mutators keep the length clamped afterwards,
    /// so this is the only fallible entry point.
    pub fn new(config: GenerationConfig, mut rng: R) -> Result<Self, GeneratorError> {
        let passphrase = generate(&config, &mut rng)?;
        Ok(Self {
            rng,
            config,
            passphrase,
            previous: String::new(),
            copy_ack: None,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The current passphrase.
    #[must_use]
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// The immediately-prior passphrase (empty before the first
    /// regeneration). Display-only; generation never reads it.
    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    /// Generate a fresh passphrase and retain the old one for display.
    pub fn regenerate(&mut self) {
        match generate(&self.config, &mut self.rng) {
            Ok(next) => {
                self.previous.zeroize();
                self.previous = std::mem::replace(&mut self.passphrase, next);
            }
            // Unreachable while the mutators keep the length clamped.
            Err(err) => tracing::warn!("passphrase regeneration failed: {err}"),
        }
    }

    /// Set the target length, clamped to the slider range, and regenerate.
    pub fn set_target_length(&mut self, length: usize) {
        self.config.target_length = length.clamp(MIN_TARGET_LENGTH, MAX_TARGET_LENGTH);
        self.regenerate();
    }

    /// Toggle the trailing number token and regenerate.
    pub fn set_include_numbers(&mut self, enabled: bool) {
        self.config.include_numbers = enabled;
        self.regenerate();
    }

    /// Toggle the trailing symbol token and regenerate.
    pub fn set_include_symbols(&mut self, enabled: bool) {
        self.config.include_symbols = enabled;
        self.regenerate();
    }

    /// Switch between the regular and special word banks and regenerate.
    pub fn set_use_special_words(&mut self, enabled: bool) {
        self.config.use_special_words = enabled;
        self.regenerate();
    }

    /// Copy the current passphrase through `sink`.
    ///
    /// On success a transient acknowledgment is recorded (see
    /// [`crate::clipboard::COPY_ACK_DURATION`]). On failure the error is
    /// logged and the state is otherwise unchanged; the passphrase value
    /// itself never reaches the log.
    pub fn copy_current(&mut self, sink: &mut dyn ClipboardSink) {
        match sink.write_text(&self.passphrase) {
            Ok(()) => self.copy_ack = Some(CopyAcknowledgment::now()),
            Err(err) => tracing::warn!("clipboard write failed: {err}"),
        }
    }

    /// Whether the "copied" acknowledgment is currently showing.
    #[must_use]
    pub fn copy_acknowledged(&self) -> bool {
        self.copy_ack.is_some_and(|ack| ack.is_active())
    }
}

impl<R: IndexSource> Drop for GeneratorState<R> {
    fn drop(&mut self) {
        self.passphrase.zeroize();
        self.previous.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrasewise_core::ScriptedIndexSource;

    /// Sink that records writes.
    #[derive(Default)]
    struct RecordingSink {
        written: Vec<String>,
    }

    impl ClipboardSink for RecordingSink {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            self.written.push(text.to_string());
            Ok(())
        }
    }

    /// Sink that always rejects the write.
    struct DeniedSink;

    impl ClipboardSink for DeniedSink {
        fn write_text(&mut self, _text: &str) -> Result<(), String> {
            Err("clipboard permission denied".to_string())
        }
    }

    fn scripted_state() -> GeneratorState<ScriptedIndexSource> {
        GeneratorState::new(
            GenerationConfig::default(),
            ScriptedIndexSource::new(vec![0, 0, 0, 0, 1, 0]),
        )
        .unwrap()
    }

    #[test]
    fn generates_on_construction() {
        let state = scripted_state();
        assert_eq!(state.passphrase(), "HappyTiger2!");
        assert_eq!(state.previous(), "");
    }

    #[test]
    fn regenerate_retains_previous() {
        let mut state = scripted_state();
        let first = state.passphrase().to_string();
        state.regenerate();
        assert_eq!(state.previous(), first);
    }

    #[test]
    fn out_of_range_config_rejected() {
        let result = GeneratorState::new(
            GenerationConfig {
                target_length: 99,
                ..GenerationConfig::default()
            },
            ScriptedIndexSource::new(vec![0]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn target_length_is_clamped() {
        let mut state = scripted_state();
        state.set_target_length(99);
        assert_eq!(state.config().target_length, 32);
        state.set_target_length(1);
        assert_eq!(state.config().target_length, 8);
    }

    #[test]
    fn toggles_regenerate() {
        let mut state = scripted_state();
        let first = state.passphrase().to_string();
        state.set_use_special_words(true);
        assert!(state.config().use_special_words);
        assert_eq!(state.previous(), first);
    }

    #[test]
    fn copy_records_acknowledgment() {
        let mut state = scripted_state();
        let mut sink = RecordingSink::default();
        state.copy_current(&mut sink);
        assert_eq!(sink.written, vec![state.passphrase().to_string()]);
        assert!(state.copy_acknowledged());
    }

    #[test]
    fn denied_copy_continues_without_acknowledgment() {
        let mut state = scripted_state();
        state.copy_current(&mut DeniedSink);
        assert!(!state.copy_acknowledged());
        // State remains usable after the failure.
        state.regenerate();
        assert!(!state.passphrase().is_empty());
    }
}
