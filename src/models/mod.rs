mod question;

pub use question::{Question, QuestionOption};
