//! `phrasewise-core` — Pure passphrase generation for PhraseWise.
//!
//! This crate is the reusable core: zero I/O, zero async, no UI
//! dependencies. Every operation is a synchronous function of its
//! arguments plus an injected [`IndexSource`], so generation is fully
//! deterministic under test.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod generator;
pub mod rng;
pub mod wordbank;

pub use error::GeneratorError;
pub use generator::{
    generate, GenerationConfig, DEFAULT_TARGET_LENGTH, MAX_TARGET_LENGTH, MIN_TARGET_LENGTH,
};
pub use rng::{IndexSource, OsIndexSource, ScriptedIndexSource};
pub use wordbank::{WordBank, WordCategory, REGULAR, SPECIAL};
