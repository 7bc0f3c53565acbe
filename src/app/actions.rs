use super::*;

impl QuizApp {
    pub fn elegir_opcion(&mut self, question_id: QuestionId, option_index: usize) {
        let changed = self.session.on_option_clicked(question_id, option_index);
        if changed && self.flagged == Some(question_id) {
            self.flagged = None;
            self.message.clear();
        }
    }

    pub fn enviar(&mut self) {
        match self.session.on_submit_clicked() {
            SubmitOutcome::Incomplete { unanswered } => {
                let number = self
                    .session
                    .bank()
                    .position(unanswered)
                    .map(|i| i + 1)
                    .unwrap_or_default();
                self.message = format!("⚠ Please answer question {number} before submitting.");
                self.flagged = Some(unanswered);
                self.scroll_to = Some(unanswered);
            }
            SubmitOutcome::Graded { .. } => {
                self.pending_flush = true;
                self.message.clear();
                self.flagged = None;
                self.show_results = true;
            }
            SubmitOutcome::AlreadySubmitted => {}
        }
    }

    pub fn reintentar(&mut self) {
        if self.session.on_retry_clicked() {
            self.show_results = false;
            self.flagged = None;
            self.scroll_to = None;
            self.scroll_to_top = true;
            self.message.clear();
        }
    }

    /// Cierra el resumen para revisar las respuestas corregidas.
    pub fn revisar_respuestas(&mut self) {
        self.show_results = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persistence::RecordingStorage;
    use crate::model::QuizPhase;

    fn app() -> QuizApp {
        QuizApp::with_store(QuizConfig::default(), MemoryStore::new()).unwrap()
    }

    fn answer_all_but(app: &mut QuizApp, skip: Option<QuestionId>) {
        let picks: Vec<_> = app
            .session
            .bank()
            .questions()
            .iter()
            .map(|q| (q.id, q.correct_index))
            .filter(|(id, _)| Some(*id) != skip)
            .collect();
        for (id, pick) in picks {
            app.elegir_opcion(id, pick);
        }
    }

    #[test]
    fn incomplete_submit_flags_and_scrolls() {
        let mut app = app();
        answer_all_but(&mut app, Some(5));
        app.enviar();
        assert_eq!(app.flagged, Some(5));
        assert_eq!(app.scroll_to, Some(5));
        assert!(!app.show_results);
        assert!(app.message.contains("question 5"));

        app.elegir_opcion(5, 2);
        assert_eq!(app.flagged, None);
        assert!(app.message.is_empty());
    }

    #[test]
    fn full_round_trip_through_retry() {
        let mut app = app();
        answer_all_but(&mut app, None);
        app.enviar();
        assert!(app.show_results);
        assert_eq!(app.session.phase(), QuizPhase::Submitted);

        app.revisar_respuestas();
        assert!(!app.show_results);
        assert_eq!(app.session.phase(), QuizPhase::Submitted);

        app.reintentar();
        assert!(app.scroll_to_top);
        assert_eq!(app.session.phase(), QuizPhase::InProgress);
        assert_eq!(app.session.progress_info().answered, 0);
        assert_eq!(app.session.best_score_label(), "10 / 10");
    }

    #[test]
    fn new_record_is_written_to_storage_right_after_grading() {
        let mut storage = RecordingStorage::default();
        storage.values.insert("quiz_best_score".into(), "8".into());
        let store = MemoryStore::load_from(Some(&storage), &["quiz_best_score"]);
        let mut app = QuizApp::with_store(QuizConfig::default(), store).unwrap();

        // Sin corrección no hay nada que volcar
        app.flush_pending(&mut storage);
        assert_eq!(storage.flushes, 0);

        answer_all_but(&mut app, None);
        app.enviar();
        assert!(app.pending_flush);

        app.flush_pending(&mut storage);
        assert_eq!(storage.values["quiz_best_score"], "10");
        assert_eq!(storage.flushes, 1);
        assert!(!app.pending_flush);

        app.flush_pending(&mut storage);
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn custom_key_is_used_for_best_score() {
        let config = QuizConfig {
            best_score_key: "other_key".into(),
            ..QuizConfig::default()
        };
        let mut app = QuizApp::with_store(config, MemoryStore::new()).unwrap();
        answer_all_but(&mut app, None);
        app.enviar();
        assert_eq!(app.session.store().get("other_key").as_deref(), Some("10"));
        assert_eq!(app.session.store().get("quiz_best_score"), None);
    }
}
