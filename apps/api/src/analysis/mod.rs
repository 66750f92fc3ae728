// Resume analysis: mode selection, prompt construction, the LLM round trip,
// score extraction and follow-up questions.
// All LLM calls go through llm_client, never directly to Gemini.

pub mod controller;
pub mod handlers;
pub mod mode;
pub mod prompt_builder;
pub mod prompts;
pub mod score;
