//! dermavision-genai
//!
//! Generative text API invocation, structured output parsing, and the
//! memoizing condition resolvers built on top of them.

pub mod cache;
pub mod client;
pub mod error;
pub mod info;
pub mod prompts;
pub mod stats;
