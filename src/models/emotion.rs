use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Confident,
    Disciplined,
    Patient,
    Neutral,
    Anxious,
    Fearful,
    Fomo,
    Greedy,
    Impatient,
    Revenge,
}

impl Emotion {
    pub const ALL: [Emotion; 10] = [
        Emotion::Confident,
        Emotion::Disciplined,
        Emotion::Patient,
        Emotion::Neutral,
        Emotion::Anxious,
        Emotion::Fearful,
        Emotion::Fomo,
        Emotion::Greedy,
        Emotion::Impatient,
        Emotion::Revenge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Confident => "confident",
            Emotion::Disciplined => "disciplined",
            Emotion::Patient => "patient",
            Emotion::Neutral => "neutral",
            Emotion::Anxious => "anxious",
            Emotion::Fearful => "fearful",
            Emotion::Fomo => "fomo",
            Emotion::Greedy => "greedy",
            Emotion::Impatient => "impatient",
            Emotion::Revenge => "revenge",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Emotion::ALL.into_iter().find(|e| e.as_str() == code)
    }

    /// Parse a comma separated tag list (`"fomo, Greedy"`).
    /// Blank input gives an empty list; duplicates keep their first position.
    pub fn parse_list(input: &str) -> AppResult<Vec<Emotion>> {
        let mut out = Vec::new();
        for raw in input.split(',') {
            if raw.trim().is_empty() {
                continue;
            }
            let e = Emotion::from_code(raw).ok_or_else(|| {
                AppError::InvalidEmotion(format!(
                    "'{}'. Valid tags: {}",
                    raw.trim(),
                    Emotion::ALL.map(|e| e.as_str()).join(", ")
                ))
            })?;
            if !out.contains(&e) {
                out.push(e);
            }
        }
        Ok(out)
    }

    /// Convert tag list → DB string
    pub fn list_to_db_str(list: &[Emotion]) -> String {
        list.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(",")
    }
}
