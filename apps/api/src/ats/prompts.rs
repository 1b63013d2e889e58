// All LLM prompt constants for the ATS pipeline.

/// Intermediate call: raw extracted text -> precise textual rendition.
/// The output is used verbatim as the resume blob in the scoring prompt; it
/// is never JSON-parsed.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are a precise resume parser.

Extract and return a clear, structured textual version of the resume below.
Maintain all details exactly as written, without summarizing or guessing.
At the end, include a JSON summary with:
{
  "is_experienced": true|false,
  "approx_years_of_experience": number,
  "detected_sections": ["Education", "Skills", "Projects", "Experience", ...],
  "extracted_links": ["https://...", "https://..."]
}

--- RESUME TEXT START ---
{resume_text}
--- RESUME TEXT END ---
"#;

/// Scoring call: job description + parsed resume -> AtsReport JSON.
pub const ATS_PROMPT_TEMPLATE: &str = r#"You are an ATS evaluator.

Compare this resume data with the job description. Return a VALID JSON object with:
{
  "score": integer (0-100),
  "picked_skills": [],
  "picked_experience": [],
  "missing_keywords": [],
  "strengths": [],
  "weaknesses": [],
  "improvement_tips": []
}

Scoring criteria:
- Skill & keyword match
- Education fit
- Relevant project/experience match
- Tools & libraries overlap
- Mentioned technologies relevant to JD

Avoid hallucinations. Use only information present in the resume.

--- JOB DESCRIPTION ---
{job_description}

--- PARSED RESUME DATA ---
{parsed_resume}
"#;
