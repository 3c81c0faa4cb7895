// Prompt fragments for cover letter generation.
// build_prompt() is the only place these are assembled.

use crate::letter::tone::Tone;
use crate::models::generation::ResolvedJob;

pub const LETTER_PREAMBLE: &str = "You are an expert cover letter writer. \
    Based on the job description and the user's CV, generate a custom, one-page cover letter.";

pub const LETTER_INSTRUCTIONS: &[&str] = &[
    "Make it personalized and engaging",
    "Reference at least 2 responsibilities or qualifications",
    "End with a short, confident closing paragraph",
];

/// Renders the generation prompt. Pure: identical inputs give byte-identical output.
///
/// User-supplied text is inserted once and never re-scanned, so braces or field
/// labels inside a CV cannot alter the template.
pub fn build_prompt(tone: Tone, job: &ResolvedJob, cv_text: &str) -> String {
    let mut instructions = String::new();
    for line in LETTER_INSTRUCTIONS
        .iter()
        .copied()
        .chain(std::iter::once(tone.style_hint()))
    {
        instructions.push_str("- ");
        instructions.push_str(line);
        instructions.push('\n');
    }

    format!(
        "{LETTER_PREAMBLE}\n\n\
         Tone: {tone}\n\
         Job Title: {title}\n\
         Company: {company}\n\
         Job Description: {description}\n\
         User CV: {cv_text}\n\n\
         Instructions:\n\
         {instructions}",
        tone = tone.label(),
        title = job.title,
        company = job.company,
        description = job.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generation::SourceKind;

    fn sample_job() -> ResolvedJob {
        ResolvedJob::new(
            Some("Backend Engineer"),
            Some("acme.io"),
            "We need a backend engineer with Go experience".to_string(),
            SourceKind::Raw,
        )
    }

    #[test]
    fn test_prompt_contains_all_fields() {
        let prompt = build_prompt(Tone::Direct, &sample_job(), "Experienced engineer...");
        assert!(prompt.starts_with("You are an expert cover letter writer."));
        assert!(prompt.contains("Tone: Direct\n"));
        assert!(prompt.contains("Job Title: Backend Engineer\n"));
        assert!(prompt.contains("Company: acme.io\n"));
        assert!(prompt.contains("Job Description: We need a backend engineer with Go experience\n"));
        assert!(prompt.contains("User CV: Experienced engineer...\n"));
    }

    #[test]
    fn test_prompt_carries_fixed_instructions_and_tone_hint() {
        let prompt = build_prompt(Tone::Creative, &sample_job(), "cv");
        for line in LETTER_INSTRUCTIONS {
            assert!(prompt.contains(&format!("- {line}\n")), "missing: {line}");
        }
        assert!(prompt.ends_with(&format!("- {}\n", Tone::Creative.style_hint())));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let job = sample_job();
        let a = build_prompt(Tone::Professional, &job, "Same CV");
        let b = build_prompt(Tone::Professional, &job, "Same CV");
        assert_eq!(a, b);
    }

    #[test]
    fn test_cv_is_inserted_verbatim() {
        let cv = "Skills: {description}\n  - Rust\n  - Tone: Creative";
        let prompt = build_prompt(Tone::Direct, &sample_job(), cv);
        assert!(prompt.contains(&format!("User CV: {cv}\n")));
        assert_eq!(prompt.matches("Tone: Direct").count(), 1);
    }

    #[test]
    fn test_placeholders_render_when_fields_missing() {
        let job = ResolvedJob::new(None, None, "desc".into(), SourceKind::Manual);
        let prompt = build_prompt(Tone::Professional, &job, "cv");
        assert!(prompt.contains("Job Title: Unknown Title\n"));
        assert!(prompt.contains("Company: Unknown Company\n"));
    }
}
