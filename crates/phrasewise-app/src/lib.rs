//! `phrasewise-app` — headless application shell for PhraseWise.
//!
//! Owns the state a frontend binds to: the current and previous
//! passphrase, configuration mutators that regenerate on every change,
//! and clipboard copy with a transient acknowledgment. Rendering and the
//! identity-provider login gate stay in the embedding frontend.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod api;
pub mod clipboard;
pub mod state;

pub use api::{generate_passphrase, GeneratePassphraseRequest, GeneratePassphraseResult};
pub use clipboard::{ClipboardSink, COPY_ACK_DURATION};
pub use state::GeneratorState;
