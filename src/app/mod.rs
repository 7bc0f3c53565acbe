use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::model::QuestionId;

// Submódulos
pub mod actions;
pub mod answers;
pub mod grading;
pub mod persistence;
pub mod queries;
pub mod session;
pub mod validation;

pub use answers::AnswerState;
pub use grading::{GradeReport, TopicScore, grade};
pub use persistence::{BestScore, KeyValueStore, MemoryStore};
pub use session::{QuizSession, SubmitOutcome};
pub use validation::find_first_unanswered;

pub struct QuizApp {
    pub config: QuizConfig,
    pub session: QuizSession,
    pub message: String,
    pub flagged: Option<QuestionId>,   // pregunta marcada tras un envío incompleto
    pub scroll_to: Option<QuestionId>, // se consume en el siguiente frame
    pub scroll_to_top: bool,
    pub show_results: bool,
    pub pending_flush: bool, // récord nuevo aún no volcado a eframe::Storage
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: QuizConfig) -> Result<Self, QuizError> {
        let store = MemoryStore::load_from(cc.storage, &[config.best_score_key.as_str()]);
        let app = Self::with_store(config, store)?;
        log::info!(
            "{} ready, best score {}",
            app.config.app_title,
            app.session.best_score_label()
        );
        Ok(app)
    }

    pub fn with_store(config: QuizConfig, store: MemoryStore) -> Result<Self, QuizError> {
        let bank = QuestionBank::embedded()?;
        let best_score = BestScore::new(config.best_score_key.clone());
        Ok(Self {
            session: QuizSession::new(bank, best_score, store),
            config,
            message: String::new(),
            flagged: None,
            scroll_to: None,
            scroll_to_top: false,
            show_results: false,
            pending_flush: false,
        })
    }

    /// Vuelca el almacén en memoria al storage de eframe y fuerza la escritura.
    pub fn flush_pending(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.pending_flush {
            return;
        }
        self.session.store().flush_into(storage);
        storage.flush();
        self.pending_flush = false;
    }
}
