use super::answers::AnswerState;
use super::grading::{GradeReport, grade};
use super::persistence::{BestScore, KeyValueStore, MemoryStore};
use super::validation::find_first_unanswered;
use crate::data::QuestionBank;
use crate::model::{QuestionId, QuizPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Falta al menos una respuesta; no se corrige nada.
    Incomplete { unanswered: QuestionId },
    Graded { report: GradeReport, best: u32 },
    AlreadySubmitted,
}

/// Controlador de la sesión: banco + respuestas + mejor puntuación.
pub struct QuizSession<S: KeyValueStore = MemoryStore> {
    bank: QuestionBank,
    answers: AnswerState,
    best_score: BestScore,
    store: S,
    report: Option<GradeReport>,
}

impl<S: KeyValueStore> QuizSession<S> {
    pub fn new(bank: QuestionBank, best_score: BestScore, store: S) -> Self {
        Self {
            bank,
            answers: AnswerState::new(),
            best_score,
            store,
            report: None,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> QuizPhase {
        self.answers.phase()
    }

    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    pub fn stored_best(&self) -> Option<u32> {
        self.best_score.stored(&self.store)
    }

    pub fn on_option_clicked(&mut self, question_id: QuestionId, option_index: usize) -> bool {
        self.answers.select(&self.bank, question_id, option_index)
    }

    /// Validar -> corregir -> guardar -> bloquear.
    pub fn on_submit_clicked(&mut self) -> SubmitOutcome {
        if self.answers.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }

        if let Some(unanswered) = find_first_unanswered(&self.bank, &self.answers) {
            log::info!(
                "submit rejected: {} of {} answered, first gap is question {unanswered}",
                self.answers.answered_count(),
                self.bank.len()
            );
            return SubmitOutcome::Incomplete { unanswered };
        }

        let report = grade(&self.bank, &self.answers);
        let best = self.best_score.record_if_best(&mut self.store, report.total);
        self.answers.lock();
        self.report = Some(report.clone());
        log::info!("quiz graded: {} / {} (best {best})", report.total, report.max_score());

        SubmitOutcome::Graded { report, best }
    }

    /// Solo tiene efecto tras enviar. Devuelve si se reinició.
    pub fn on_retry_clicked(&mut self) -> bool {
        if !self.answers.is_submitted() {
            return false;
        }
        self.answers.reset();
        self.report = None;
        log::info!("quiz restarted");
        true
    }
}
