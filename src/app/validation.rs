use super::answers::AnswerState;
use crate::data::QuestionBank;
use crate::model::QuestionId;

/// Primera pregunta sin responder, siguiendo el orden del banco.
pub fn find_first_unanswered(bank: &QuestionBank, answers: &AnswerState) -> Option<QuestionId> {
    bank.questions()
        .iter()
        .find(|q| answers.selection(q.id).is_none())
        .map(|q| q.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_lowest_bank_index_gap() {
        let bank = QuestionBank::embedded().unwrap();
        let mut answers = AnswerState::new();
        // Se responde en orden inverso: el resultado depende del banco, no de la inserción
        for id in [10, 9, 8, 7, 5, 4, 2, 1] {
            answers.select(&bank, id, 0);
        }
        assert_eq!(find_first_unanswered(&bank, &answers), Some(3));
        answers.select(&bank, 3, 0);
        assert_eq!(find_first_unanswered(&bank, &answers), Some(6));
    }

    #[test]
    fn none_when_complete() {
        let bank = QuestionBank::embedded().unwrap();
        let mut answers = AnswerState::new();
        assert_eq!(find_first_unanswered(&bank, &answers), Some(1));
        for q in bank.questions() {
            answers.select(&bank, q.id, 2);
        }
        assert_eq!(find_first_unanswered(&bank, &answers), None);
    }
}
