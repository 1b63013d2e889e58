// All LLM prompt constants for the interview pipeline.

/// Round 1: resume text -> structured candidate data.
/// Replace `{resume_text}` before sending. The schema is snake_case so the
/// response deserializes straight into `CandidateProfile`.
pub const STRUCTURE_PROMPT_TEMPLATE: &str = r#"You are a resume information extractor.

Given the resume text between the markers below, extract structured data and
return a single valid JSON object with EXACTLY these keys (omit a key only if
the resume has no information for it):

{
  "full_name": "string",
  "contact": {"phone": "string", "email": "string"},
  "skills": ["string"],
  "work_experience": [{"company": "string", "title": "string", "duration": "string"}],
  "projects": [{"title": "string", "technologies": ["string"], "description": "string"}],
  "education": [{"degree": "string", "institute": "string", "year": "string"}],
  "certifications": ["string"],
  "years_of_experience": number,
  "level": "Fresher" | "Junior" | "Mid-level" | "Senior" | "Lead",
  "tech_stack": ["string"]
}

Rules:
- "tech_stack" is a deduplicated array of every technology mentioned anywhere.
- Return ONLY the JSON object. No markdown, no code fences, no explanations.

--- RESUME TEXT START ---
{resume_text}
--- RESUME TEXT END ---
"#;

/// Round 2: structured candidate data -> interview questions.
/// Replace each `{...}` placeholder with the JSON-serialized profile field.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate 5 technical interview questions based on this candidate's resume:

Skills: {skills}
Projects: {projects}
Work Experience: {work_experience}
Education: {education}
Certifications: {certifications}
Level: {level}

Rules:
- All questions must be technical and relevant.
- If the level is "Fresher", ask beginner-to-intermediate questions.
- Return ONLY a JSON array of strings, e.g. ["Question 1", "Question 2", ...]
- No markdown, no code blocks, no explanations.
"#;
