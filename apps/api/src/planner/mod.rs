// Planner: meal + workout plan generation, macro extraction, and export.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod macros;
pub mod prompts;
