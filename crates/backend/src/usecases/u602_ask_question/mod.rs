pub mod executor;
pub mod prompt;

pub use executor::{answer_question, QUESTION_MISSING};
