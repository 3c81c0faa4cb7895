// Cover letter prompt assembly: tone selection and the prompt template.
// No network calls and no state here.

pub mod prompts;
pub mod tone;

pub use prompts::build_prompt;
pub use tone::Tone;
