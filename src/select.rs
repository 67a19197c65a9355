//! Question selection.
//!
//! Draws a bounded, randomized question set for a roadmap's skills from
//! the static bank and normalizes the drawn records.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::{BankQuestion, QuestionBank};
use crate::models::{Question, QuestionOption};

/// Maximum questions drawn per resolved skill.
pub const MAX_PER_SKILL: usize = 3;

/// Maximum questions in a single quiz.
pub const MAX_TOTAL: usize = 20;

/// Outcome of a selection run.
#[derive(Debug, Clone)]
pub struct Selection {
    pub questions: Vec<Question>,
    /// True when the skill list matched nothing and the whole bank was
    /// sampled instead. Surfaced to the caller, never silent.
    pub used_fallback: bool,
}

/// Draw the question set for `skills`.
///
/// Up to [`MAX_PER_SKILL`] questions per skill, without replacement,
/// truncated to [`MAX_TOTAL`] overall. When `skills` is empty or none of
/// them exist in the bank, samples up to [`MAX_TOTAL`] from the entire
/// bank instead and sets `used_fallback`.
pub fn select_questions<R: Rng>(bank: &QuestionBank, skills: &[String], rng: &mut R) -> Selection {
    let mut drawn: Vec<(&str, &BankQuestion)> = Vec::new();

    for skill in skills {
        if let Some(pool) = bank.for_skill(skill) {
            for q in pool.choose_multiple(rng, MAX_PER_SKILL) {
                drawn.push((skill.as_str(), q));
            }
        }
    }

    let used_fallback = drawn.is_empty();
    if used_fallback {
        let pool = bank.all();
        drawn = pool.choose_multiple(rng, MAX_TOTAL).copied().collect();
    }

    drawn.truncate(MAX_TOTAL);

    let questions = drawn
        .into_iter()
        .enumerate()
        .map(|(index, (skill, q))| normalize(index as u32 + 1, skill, q))
        .collect();

    Selection {
        questions,
        used_fallback,
    }
}

/// Normalize a bank record: synthetic id, options re-keyed `option_a`,
/// `option_b`, ... in bank order, correct key derived from the bank's
/// correct-answer text.
fn normalize(id: u32, skill: &str, raw: &BankQuestion) -> Question {
    let options: Vec<QuestionOption> = raw
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| QuestionOption {
            key: option_key(i),
            text: text.clone(),
        })
        .collect();

    // Bank validation guarantees a match.
    let correct_index = raw
        .options
        .iter()
        .position(|o| *o == raw.correct_answer)
        .unwrap_or_default();

    Question {
        id,
        prompt: raw.question.clone(),
        correct_key: option_key(correct_index),
        options,
        skill: skill.to_string(),
    }
}

fn option_key(index: usize) -> String {
    format!("option_{}", (b'a' + index as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank() -> QuestionBank {
        let mut json = String::from("{");
        for (s, skill) in ["Alpha", "Beta", "Gamma"].iter().enumerate() {
            if s > 0 {
                json.push(',');
            }
            json.push_str(&format!("\"{skill}\":["));
            for i in 0..8 {
                if i > 0 {
                    json.push(',');
                }
                json.push_str(&format!(
                    r#"{{"question":"{skill} q{i}","options":["w","x","y","z"],"correctAnswer":"y"}}"#
                ));
            }
            json.push(']');
        }
        json.push('}');
        QuestionBank::from_json(&json).unwrap()
    }

    #[test]
    fn draws_at_most_three_per_skill() {
        let bank = bank();
        let skills = vec!["Alpha".to_string(), "Gamma".to_string()];
        let mut rng = StdRng::seed_from_u64(7);

        let selection = select_questions(&bank, &skills, &mut rng);
        assert!(!selection.used_fallback);
        assert_eq!(selection.questions.len(), 6);

        let alpha = selection
            .questions
            .iter()
            .filter(|q| q.skill == "Alpha")
            .count();
        assert_eq!(alpha, 3);
    }

    #[test]
    fn truncates_to_twenty() {
        let mut json = String::from("{");
        for s in 0..10 {
            if s > 0 {
                json.push(',');
            }
            json.push_str(&format!("\"Skill{s}\":["));
            for i in 0..5 {
                if i > 0 {
                    json.push(',');
                }
                json.push_str(&format!(
                    r#"{{"question":"q{i}","options":["a","b"],"correctAnswer":"a"}}"#
                ));
            }
            json.push(']');
        }
        json.push('}');
        let bank = QuestionBank::from_json(&json).unwrap();
        let skills: Vec<String> = (0..10).map(|s| format!("Skill{s}")).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let selection = select_questions(&bank, &skills, &mut rng);
        assert_eq!(selection.questions.len(), MAX_TOTAL);
    }

    #[test]
    fn falls_back_to_whole_bank_when_no_skills_resolve() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(3);

        let selection = select_questions(&bank, &[], &mut rng);
        assert!(selection.used_fallback);
        assert!(!selection.questions.is_empty());
        assert!(selection.questions.len() <= MAX_TOTAL);
    }

    #[test]
    fn unknown_skills_also_trigger_fallback() {
        let bank = bank();
        let skills = vec!["Nope".to_string()];
        let mut rng = StdRng::seed_from_u64(3);

        let selection = select_questions(&bank, &skills, &mut rng);
        assert!(selection.used_fallback);
    }

    #[test]
    fn normalizes_ids_and_option_keys() {
        let bank = bank();
        let skills = vec!["Beta".to_string()];
        let mut rng = StdRng::seed_from_u64(11);

        let selection = select_questions(&bank, &skills, &mut rng);
        for (i, q) in selection.questions.iter().enumerate() {
            assert_eq!(q.id, i as u32 + 1);
            let keys: Vec<&str> = q.options.iter().map(|o| o.key.as_str()).collect();
            assert_eq!(keys, ["option_a", "option_b", "option_c", "option_d"]);
            // correctAnswer "y" is the third option in bank order.
            assert_eq!(q.correct_key, "option_c");
            assert_eq!(q.correct_text(), "y");
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let bank = bank();
        let skills = vec!["Alpha".to_string(), "Beta".to_string()];

        let a = select_questions(&bank, &skills, &mut StdRng::seed_from_u64(42));
        let b = select_questions(&bank, &skills, &mut StdRng::seed_from_u64(42));

        let prompts_a: Vec<&str> = a.questions.iter().map(|q| q.prompt.as_str()).collect();
        let prompts_b: Vec<&str> = b.questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts_a, prompts_b);
    }
}
