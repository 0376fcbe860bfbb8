//! verse-forge: personalized poem generation driven by an LLM.
//!
//! This library compiles a typed poem-preference record into an ordered
//! sequence of natural-language directives and submits it, single-shot, to
//! an OpenAI-compatible completion endpoint. The instruction compiler is the
//! core: a pure, deterministic function whose output ordering is the literal
//! prompt the model sees.

// Core modules
pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod generator;
pub mod llm;
pub mod preferences;

// Re-export the commonly used types
pub use compiler::{compile, InstructionSet};
pub use error::GenerationError;
pub use generator::PoemGenerator;
pub use preferences::PoemPreferences;
