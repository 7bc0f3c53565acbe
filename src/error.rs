use crate::model::QuestionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("could not parse the question bank: {0}")]
    BankParse(#[from] serde_yaml::Error),

    #[error("the question bank is empty")]
    EmptyBank,

    #[error("question ids must be positive (found 0)")]
    ZeroId,

    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error("question {id} marks option {index} as correct but only has {options} options")]
    CorrectIndexOutOfRange {
        id: QuestionId,
        index: usize,
        options: usize,
    },
}
