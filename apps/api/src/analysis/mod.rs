// Resume Analysis — critique and optimized-content generation.
// Implements: upload handling, LLM critique with fixed fallback, optimization.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
