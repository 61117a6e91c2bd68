// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to every system instruction: results are shown as wrapped plain text.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond in plain text suitable for a fixed-width display. \
    Use numbered sections and short paragraphs. \
    Do NOT wrap the answer in code fences. \
    Do NOT include apologies or remarks about being an AI.";

/// Introduces the expected-output criteria at the end of every task prompt.
pub const EXPECTED_OUTPUT_PREFIX: &str = "This is the expected criteria for your final answer:";
