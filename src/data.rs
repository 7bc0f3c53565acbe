// src/data.rs

use crate::error::QuizError;
use crate::model::{Question, QuestionId, Topic};
use std::collections::{BTreeMap, HashSet};

/// Banco de preguntas inmutable, en el orden en que se presentan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self, QuizError> {
        let file_content = include_str!("data/quiz_questions.yaml");
        Self::from_yaml(file_content)
    }

    pub fn from_yaml(text: &str) -> Result<Self, QuizError> {
        let questions: Vec<Question> = serde_yaml::from_str(text)?;
        Self::new(questions)
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if q.id == 0 {
                return Err(QuizError::ZeroId);
            }
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateId(q.id));
            }
            if q.correct_index >= q.options.len() {
                return Err(QuizError::CorrectIndexOutOfRange {
                    id: q.id,
                    index: q.correct_index,
                    options: q.options.len(),
                });
            }
        }

        log::debug!("question bank loaded with {} questions", questions.len());
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Índice 0-based de la pregunta dentro del banco
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn topic_counts(&self) -> BTreeMap<Topic, usize> {
        let mut counts = BTreeMap::new();
        for q in &self.questions {
            *counts.entry(q.topic).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml_question(id: u32, options: &str, correct: usize) -> String {
        format!(
            "- id: {id}\n  topic: CSS\n  prompt: 'q{id}'\n  options: {options}\n  correct_index: {correct}\n"
        )
    }

    #[test]
    fn embedded_bank_has_ten_questions_in_order() {
        let bank = QuestionBank::embedded().unwrap();
        let ids: Vec<_> = bank.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn embedded_bank_topic_distribution() {
        let bank = QuestionBank::embedded().unwrap();
        let counts = bank.topic_counts();
        assert_eq!(counts[&Topic::Html], 3);
        assert_eq!(counts[&Topic::Css], 4);
        assert_eq!(counts[&Topic::JavaScript], 3);
    }

    #[test]
    fn embedded_bank_keeps_quoted_options() {
        let bank = QuestionBank::embedded().unwrap();
        let q6 = bank.get(6).unwrap();
        assert_eq!(q6.options[2], "\"object\"");
        assert!(q6.is_correct(2));
        assert_eq!(bank.get(9).unwrap().options[0], "type=\"range\"");
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(QuestionBank::from_yaml("[]"), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = yaml_question(1, "[a, b, c, d]", 0) + &yaml_question(1, "[a, b, c, d]", 1);
        assert!(matches!(
            QuestionBank::from_yaml(&text),
            Err(QuizError::DuplicateId(1))
        ));
    }

    #[test]
    fn rejects_zero_id() {
        let text = yaml_question(0, "[a, b, c, d]", 0);
        assert!(matches!(QuestionBank::from_yaml(&text), Err(QuizError::ZeroId)));
    }

    #[test]
    fn rejects_wrong_option_count() {
        for options in ["[a, b, c]", "[a, b, c, d, e]"] {
            let text = yaml_question(3, options, 0);
            assert!(matches!(
                QuestionBank::from_yaml(&text),
                Err(QuizError::BankParse(_))
            ));
        }
    }

    #[test]
    fn rejects_correct_index_out_of_range() {
        let text = yaml_question(2, "[a, b, c, d]", 4);
        assert!(matches!(
            QuestionBank::from_yaml(&text),
            Err(QuizError::CorrectIndexOutOfRange { id: 2, index: 4, .. })
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            QuestionBank::from_yaml("- id: [nope"),
            Err(QuizError::BankParse(_))
        ));
    }

    #[test]
    fn position_follows_bank_order() {
        let bank = QuestionBank::embedded().unwrap();
        assert_eq!(bank.position(1), Some(0));
        assert_eq!(bank.position(10), Some(9));
        assert_eq!(bank.position(42), None);
    }
}
