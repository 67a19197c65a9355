//! Static question bank.
//!
//! The bank is a bundled JSON document keyed by skill name, each value an
//! array of `{question, options, correctAnswer}` records. It is loaded
//! locally and never fetched from the backend.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const BUNDLED_BANK: &str = include_str!("../assets/question_bank.json");

/// A raw bank record, as stored in the JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct BankQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
}

/// Question bank keyed by skill name.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    skills: BTreeMap<String, Vec<BankQuestion>>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question bank is empty")]
    Empty,

    #[error("skill {skill:?} entry {index}: {reason}")]
    Invalid {
        skill: String,
        index: usize,
        reason: String,
    },
}

impl QuestionBank {
    /// Load the bank bundled into the binary.
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json(BUNDLED_BANK)
    }

    /// Load a bank from a JSON file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate a bank from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let skills: BTreeMap<String, Vec<BankQuestion>> = serde_json::from_str(json)?;

        if skills.values().all(|qs| qs.is_empty()) {
            return Err(LoadError::Empty);
        }

        for (skill, questions) in &skills {
            for (index, q) in questions.iter().enumerate() {
                if q.options.len() < 2 {
                    return Err(LoadError::Invalid {
                        skill: skill.clone(),
                        index,
                        reason: "fewer than 2 options".to_string(),
                    });
                }
                if !q.options.contains(&q.correct_answer) {
                    return Err(LoadError::Invalid {
                        skill: skill.clone(),
                        index,
                        reason: "correctAnswer does not match any option".to_string(),
                    });
                }
            }
        }

        Ok(Self { skills })
    }

    /// Questions for a single skill, if the skill exists in the bank.
    pub fn for_skill(&self, skill: &str) -> Option<&[BankQuestion]> {
        self.skills.get(skill).map(|qs| qs.as_slice())
    }

    /// All (skill, question) pairs across the bank, in skill order.
    pub fn all(&self) -> Vec<(&str, &BankQuestion)> {
        self.skills
            .iter()
            .flat_map(|(skill, qs)| qs.iter().map(move |q| (skill.as_str(), q)))
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn question_count(&self) -> usize {
        self.skills.values().map(|qs| qs.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "JavaScript": [
            {
                "question": "Which keyword declares a block-scoped variable?",
                "options": ["var", "let", "function", "static"],
                "correctAnswer": "let"
            }
        ],
        "SQL": [
            {
                "question": "Which clause filters grouped rows?",
                "options": ["WHERE", "HAVING", "ORDER BY"],
                "correctAnswer": "HAVING"
            }
        ]
    }"#;

    #[test]
    fn parses_valid_bank() {
        let bank = QuestionBank::from_json(SAMPLE).unwrap();
        assert_eq!(bank.skill_count(), 2);
        assert_eq!(bank.question_count(), 2);
        assert_eq!(bank.for_skill("SQL").unwrap()[0].correct_answer, "HAVING");
        assert!(bank.for_skill("Go").is_none());
    }

    #[test]
    fn rejects_correct_answer_not_among_options() {
        let json = r#"{
            "SQL": [
                {
                    "question": "q",
                    "options": ["a", "b"],
                    "correctAnswer": "c"
                }
            ]
        }"#;
        let err = QuestionBank::from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
    }

    #[test]
    fn rejects_single_option_question() {
        let json = r#"{"SQL": [{"question": "q", "options": ["a"], "correctAnswer": "a"}]}"#;
        assert!(matches!(
            QuestionBank::from_json(json).unwrap_err(),
            LoadError::Invalid { .. }
        ));
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(
            QuestionBank::from_json("{}").unwrap_err(),
            LoadError::Empty
        ));
    }

    #[test]
    fn bundled_bank_is_valid() {
        let bank = QuestionBank::bundled().unwrap();
        assert!(bank.question_count() > 0);
    }
}
