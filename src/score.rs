//! Score computation and results derivation.
//!
//! A [`ScoreResult`] is computed exactly once, at submission, from the
//! frozen session state. Nothing here mutates or refetches anything.

use std::collections::BTreeMap;

use crate::models::Question;

/// Per-question classification in the results review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unattempted,
}

/// Review line for a single question: resolved option texts plus verdict.
#[derive(Debug, Clone)]
pub struct QuestionReview {
    pub question_id: u32,
    pub prompt: String,
    pub skill: String,
    pub chosen_text: Option<String>,
    pub correct_text: String,
    pub verdict: Verdict,
}

/// Per-skill ("course") aggregate for the proportional results bar.
#[derive(Debug, Clone)]
pub struct CourseBreakdown {
    pub course: String,
    pub correct: usize,
    pub total: usize,
}

/// Final outcome of a quiz session. Immutable after computation.
#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// 100 × correct / total, exactly.
    pub percent: f64,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub total: usize,
    /// True when the session was finalized by the timer.
    pub timed_out: bool,
    pub reviews: Vec<QuestionReview>,
    pub courses: Vec<CourseBreakdown>,
}

impl ScoreResult {
    pub fn compute(
        questions: &[Question],
        answers: &BTreeMap<u32, String>,
        timed_out: bool,
    ) -> Self {
        let mut correct = 0;
        let mut incorrect = 0;
        let mut unattempted = 0;
        let mut reviews = Vec::with_capacity(questions.len());
        let mut by_course: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

        for question in questions {
            let chosen = answers.get(&question.id);
            let verdict = match chosen {
                Some(key) if *key == question.correct_key => Verdict::Correct,
                Some(_) => Verdict::Incorrect,
                None => Verdict::Unattempted,
            };

            match verdict {
                Verdict::Correct => correct += 1,
                Verdict::Incorrect => incorrect += 1,
                Verdict::Unattempted => unattempted += 1,
            }

            let entry = by_course.entry(question.skill.as_str()).or_default();
            entry.1 += 1;
            if verdict == Verdict::Correct {
                entry.0 += 1;
            }

            reviews.push(QuestionReview {
                question_id: question.id,
                prompt: question.prompt.clone(),
                skill: question.skill.clone(),
                chosen_text: chosen
                    .and_then(|key| question.option_text(key))
                    .map(str::to_string),
                correct_text: question.correct_text().to_string(),
                verdict,
            });
        }

        let total = questions.len();
        let percent = if total > 0 {
            100.0 * correct as f64 / total as f64
        } else {
            0.0
        };

        let courses = by_course
            .into_iter()
            .map(|(course, (correct, total))| CourseBreakdown {
                course: course.to_string(),
                correct,
                total,
            })
            .collect();

        Self {
            percent,
            correct,
            incorrect,
            unattempted,
            total,
            timed_out,
            reviews,
            courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    fn question(id: u32, skill: &str) -> Question {
        Question {
            id,
            prompt: format!("question {id}"),
            options: vec![
                QuestionOption {
                    key: "option_a".into(),
                    text: "first".into(),
                },
                QuestionOption {
                    key: "option_b".into(),
                    text: "second".into(),
                },
            ],
            correct_key: "option_b".into(),
            skill: skill.into(),
        }
    }

    #[test]
    fn all_correct_scores_hundred() {
        let questions: Vec<_> = (1..=5).map(|i| question(i, "SQL")).collect();
        let answers: BTreeMap<u32, String> =
            (1..=5).map(|i| (i, "option_b".to_string())).collect();

        let result = ScoreResult::compute(&questions, &answers, false);
        assert_eq!(result.percent, 100.0);
        assert_eq!(result.correct, 5);
        assert_eq!(result.incorrect, 0);
        assert_eq!(result.unattempted, 0);
    }

    #[test]
    fn mixed_answers_score_exactly() {
        // 2 correct, 1 incorrect, 2 unanswered out of 5 → 40.
        let questions: Vec<_> = (1..=5).map(|i| question(i, "SQL")).collect();
        let mut answers = BTreeMap::new();
        answers.insert(1, "option_b".to_string());
        answers.insert(2, "option_b".to_string());
        answers.insert(3, "option_a".to_string());

        let result = ScoreResult::compute(&questions, &answers, false);
        assert_eq!(result.percent, 40.0);
        assert_eq!(result.correct, 2);
        assert_eq!(result.incorrect, 1);
        assert_eq!(result.unattempted, 2);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn review_resolves_option_texts() {
        let questions = vec![question(1, "SQL")];
        let mut answers = BTreeMap::new();
        answers.insert(1, "option_a".to_string());

        let result = ScoreResult::compute(&questions, &answers, false);
        let review = &result.reviews[0];
        assert_eq!(review.chosen_text.as_deref(), Some("first"));
        assert_eq!(review.correct_text, "second");
        assert_eq!(review.verdict, Verdict::Incorrect);
    }

    #[test]
    fn aggregates_per_course() {
        let mut questions = vec![question(1, "CSS"), question(2, "CSS")];
        questions.push(question(3, "SQL"));
        let mut answers = BTreeMap::new();
        answers.insert(1, "option_b".to_string());
        answers.insert(3, "option_b".to_string());

        let result = ScoreResult::compute(&questions, &answers, false);
        assert_eq!(result.courses.len(), 2);
        let css = result.courses.iter().find(|c| c.course == "CSS").unwrap();
        assert_eq!((css.correct, css.total), (1, 2));
        let sql = result.courses.iter().find(|c| c.course == "SQL").unwrap();
        assert_eq!((sql.correct, sql.total), (1, 1));
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let result = ScoreResult::compute(&[], &BTreeMap::new(), false);
        assert_eq!(result.percent, 0.0);
        assert_eq!(result.total, 0);
    }
}
