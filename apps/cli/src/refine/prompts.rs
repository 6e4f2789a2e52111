// All LLM prompt constants for the Refine module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume refinement — enforces JSON-only output.
pub const REFINE_SYSTEM: &str = "You are an expert career coach and professional \
    resume writer specializing in optimizing resumes for Applicant Tracking \
    Systems (ATS). Your goal is to refine a user's resume to maximize its \
    chances of passing through an ATS and impressing a human recruiter for a \
    specific job. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume refinement prompt template.
/// Replace: {integrity_instruction}, {additional_section}, {resume_text}, {jd_text}
pub const REFINE_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text and job description. Refine the resume to be ATS-friendly and perfectly tailored for the specific job.
{additional_section}
Key instructions:
1. KEYWORD INTEGRATION: Seamlessly integrate relevant keywords and phrases from the job description into the resume's experience and summary sections.
2. ACTION VERBS AND QUANTIFIABLE RESULTS: Rephrase bullet points to start with strong action verbs. Where possible, quantify achievements (e.g. "Increased efficiency by 15%" instead of "Made things more efficient").
3. PRESERVE INTEGRITY: {integrity_instruction}
4. STRUCTURE ADHERENCE: Strictly adhere to the JSON schema below. Transfer sections like "Projects" or "Certifications" into the "customSections" array if they exist.

Return a JSON object with this EXACT schema (no extra fields):
{
  "contact": {
    "name": "Jane Doe",
    "email": "jane@example.com",
    "phone": "(555) 123-4567",
    "location": "San Francisco, CA",
    "linkedin": "https://linkedin.com/in/janedoe",
    "portfolio": "https://janedoe.dev"
  },
  "summary": "A 2-4 sentence professional summary tailored to the job description, highlighting key qualifications.",
  "experience": [
    {
      "role": "Senior Engineer",
      "company": "Acme Corp",
      "location": "San Francisco, CA",
      "date": "2020 - Present",
      "description": [
        "Bullet points starting with a strong action verb, optimized with keywords from the job description, quantified with metrics where possible"
      ]
    }
  ],
  "education": [
    {"degree": "B.S. Computer Science", "institution": "State University", "date": "2016"}
  ],
  "skills": [
    {"category": "Programming Languages", "items": ["Rust", "Python"]}
  ],
  "customSections": [
    {"title": "Projects", "content": "A paragraph of text. Use newline characters for lists if needed."}
  ]
}

Rules for the schema:
- "contact.linkedin" and "contact.portfolio" are optional: omit them when the original resume has none.
- "customSections" is optional: include it only for sections present in the original resume that are relevant to the job description.
- "contact", "summary", "experience", "education", and "skills" are required.

ORIGINAL RESUME TEXT:
---
{resume_text}
---

TARGET JOB DESCRIPTION:
---
{jd_text}
---"#;

/// Highest-priority user instructions, injected only when the user supplied
/// notes. Replace: {additional_info}
pub const ADDITIONAL_INFO_TEMPLATE: &str = r#"
ADDITIONAL USER INSTRUCTIONS (HIGHEST PRIORITY):
The user has provided the following specific instructions, additions, or modifications. You MUST incorporate these into your response. For example, if they ask to add a new section or skill, you must add it.
---
{additional_info}
---
"#;
