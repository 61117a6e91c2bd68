// Tailoring pipeline: resume analysis → job analysis → improvement suggestions.
// All model calls go through llm_client — the steps here are plain data plus one runner.

pub mod prompts;
pub mod runner;
pub mod steps;
