//! Input collaborators injected into the engine.

pub mod prompt;

pub use prompt::{LinePrompt, Prompt, ScriptedPrompt};
