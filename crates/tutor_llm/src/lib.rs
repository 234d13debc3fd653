//! External text-generation boundary for the tutorboard backend.
//!
//! Holds the chat-completion client, the fixed prompt templates, and the
//! annotation pass that enriches a solved step sequence. The algebra core
//! in `tutor_solver` has no dependency on anything here.

pub mod annotate;
pub mod client;
pub mod prompts;

pub use annotate::{annotate_steps, FALLBACK_COMMENT};
pub use client::{
    ChatClient, GenerationError, GenerationRequest, TextGenerator, GROQ_API_URL, GROQ_MODEL,
};
