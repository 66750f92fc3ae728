//! Prompt Builder: selects the template for a mode and interpolates the
//! resume text and job description verbatim.
//!
//! No escaping, sanitization or truncation is applied: a long resume yields a
//! long prompt. Substitution is single-pass, so placeholder-looking text inside
//! a resume (e.g. `{job_description}`) is never expanded a second time.

use crate::analysis::mode::AnalysisMode;
use crate::analysis::prompts::FOLLOW_UP_TEMPLATE;

/// Builds the analysis prompt for `mode`. An absent job description leaves
/// its slot empty.
pub fn build_prompt(mode: AnalysisMode, resume_text: &str, job_description: Option<&str>) -> String {
    fill_template(
        mode.template(),
        &[
            ("resume_text", resume_text),
            ("job_description", job_description.unwrap_or_default()),
        ],
    )
}

/// Builds the follow-up prompt. `previous_response` is the most recent model
/// response in the session.
pub fn build_follow_up_prompt(question: &str, resume_text: &str, previous_response: &str) -> String {
    fill_template(
        FOLLOW_UP_TEMPLATE,
        &[
            ("question", question),
            ("resume_text", resume_text),
            ("previous_response", previous_response),
        ],
    )
}

/// Replaces each `{key}` in `template` with its value. Unknown braces are
/// copied through unchanged. Values are never rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let hit = values.iter().find(|(key, _)| {
            after
                .strip_prefix(key)
                .is_some_and(|tail| tail.starts_with('}'))
        });

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
