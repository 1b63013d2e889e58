//! Model output sanitization.
//!
//! Model responses are not trusted to be pure JSON: they may arrive wrapped
//! in markdown code fences, and scoring responses commonly carry trailing
//! commas. These helpers normalize such artifacts before the syntactic parse;
//! structural validation happens afterwards in the pipelines.

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
/// Idempotent: already-clean input comes back unchanged.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Removes commas that immediately precede (modulo whitespace) a closing
/// brace or bracket, e.g. `["x",]` -> `["x"]`. Scoring models emit these
/// often enough that the repair runs before every ATS parse attempt.
///
/// Known limitation: the scan is not string-aware, so a comma inside a
/// string literal whose next non-space character is `}` or `]` is also
/// removed.
pub fn repair_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == ',' {
            let rest = text[i + 1..].trim_start();
            if rest.starts_with('}') || rest.starts_with(']') {
                continue;
            }
        }
        out.push(c);
    }
    out
}
