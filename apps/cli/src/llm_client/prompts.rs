// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every rewrite prompt: the model may rephrase, but
/// never fabricate.
pub const INTEGRITY_INSTRUCTION: &str = "\
    CRITICAL: Do NOT invent new experiences, skills, employers, or dates. \
    Only rephrase and enhance information already present in the source \
    resume, unless the user's additional instructions explicitly supply new \
    information. Faithfully transfer every section of the original resume.";
