//! Tone selection — the style the user asks the letter to be written in.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Creative,
    Direct,
}

impl Tone {
    /// Label rendered verbatim into the prompt (`Tone: <label>`).
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Creative => "Creative",
            Tone::Direct => "Direct",
        }
    }

    /// Extra instruction line appended after the fixed instructions.
    pub fn style_hint(&self) -> &'static str {
        match self {
            Tone::Professional => "Keep the register polished and formal",
            Tone::Creative => "Open with a memorable hook and let some personality show",
            Tone::Direct => "Keep sentences short and lead with concrete results",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_serde_uses_labels() {
        let tone: Tone = serde_json::from_str(r#""Creative""#).unwrap();
        assert_eq!(tone, Tone::Creative);
        assert_eq!(serde_json::to_string(&Tone::Direct).unwrap(), r#""Direct""#);
    }

    #[test]
    fn test_unknown_tone_is_rejected() {
        assert!(serde_json::from_str::<Tone>(r#""Sarcastic""#).is_err());
    }

    #[test]
    fn test_default_is_professional() {
        assert_eq!(Tone::default(), Tone::Professional);
    }

    #[test]
    fn test_every_tone_has_distinct_hint() {
        let hints = [
            Tone::Professional.style_hint(),
            Tone::Creative.style_hint(),
            Tone::Direct.style_hint(),
        ];
        assert_ne!(hints[0], hints[1]);
        assert_ne!(hints[1], hints[2]);
        assert_ne!(hints[0], hints[2]);
    }
}
