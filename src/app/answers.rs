use crate::data::QuestionBank;
use crate::model::{QuestionId, QuizPhase};
use std::collections::BTreeMap;

/// Respuestas en curso: pregunta -> índice de opción elegida.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerState {
    selections: BTreeMap<QuestionId, usize>,
    submitted: bool,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda la elección. Devuelve `false` (sin tocar nada) si ya se envió,
    /// si la pregunta no existe o si el índice está fuera de rango.
    pub fn select(
        &mut self,
        bank: &QuestionBank,
        question_id: QuestionId,
        option_index: usize,
    ) -> bool {
        if self.submitted {
            return false;
        }
        let Some(question) = bank.get(question_id) else {
            log::debug!("ignoring selection for unknown question {question_id}");
            return false;
        };
        if option_index >= question.options.len() {
            log::debug!("ignoring option {option_index} for question {question_id}");
            return false;
        }
        self.selections.insert(question_id, option_index);
        true
    }

    pub fn selection(&self, question_id: QuestionId) -> Option<usize> {
        self.selections.get(&question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions()
            .iter()
            .all(|q| self.selections.contains_key(&q.id))
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> QuizPhase {
        if self.submitted {
            QuizPhase::Submitted
        } else {
            QuizPhase::InProgress
        }
    }

    /// Bloquea las respuestas; lo llama la sesión justo después de corregir.
    pub fn lock(&mut self) {
        self.submitted = true;
    }

    pub fn reset(&mut self) {
        self.selections.clear();
        self.submitted = false;
    }
}
