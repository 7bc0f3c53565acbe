use super::persistence::KeyValueStore;
use super::session::QuizSession;
use crate::model::{QuestionId, Topic};
use crate::view_models::{ProgressInfo, QuestionView, ResultsInfo, TopicRow, best_score_label};

impl<S: KeyValueStore> QuizSession<S> {
    pub fn question_views(&self, flagged: Option<QuestionId>) -> Vec<QuestionView> {
        let graded = self.answers().is_submitted();
        self.bank()
            .questions()
            .iter()
            .enumerate()
            .map(|(qi, q)| QuestionView {
                id: q.id,
                number: qi + 1,
                topic: q.topic,
                prompt: q.prompt.clone(),
                options: q.options.to_vec(),
                selected: self.answers().selection(q.id),
                graded,
                correct_index: q.correct_index,
                flagged: flagged == Some(q.id),
            })
            .collect()
    }

    pub fn progress_info(&self) -> ProgressInfo {
        ProgressInfo {
            answered: self.answers().answered_count(),
            total: self.bank().len(),
        }
    }

    pub fn results_info(&self) -> Option<ResultsInfo> {
        let report = self.report()?;
        Some(ResultsInfo {
            total_score: report.total,
            max_score: report.max_score(),
            per_topic: Topic::ALL
                .iter()
                .map(|&topic| {
                    let score = report.topic(topic);
                    TopicRow {
                        topic,
                        correct: score.correct,
                        total: score.total,
                    }
                })
                .collect(),
            best: self.stored_best().unwrap_or(0),
        })
    }

    pub fn best_score_label(&self) -> String {
        best_score_label(self.stored_best(), self.bank().len())
    }
}

#[cfg(test)]
mod tests {
    use crate::app::persistence::{BestScore, MemoryStore};
    use crate::app::session::QuizSession;
    use crate::data::QuestionBank;
    use crate::model::{OptionStatus, Topic};

    fn session() -> QuizSession {
        QuizSession::new(
            QuestionBank::embedded().unwrap(),
            BestScore::new("quiz_best_score"),
            MemoryStore::new(),
        )
    }

    #[test]
    fn views_follow_bank_order_and_selection() {
        let mut s = session();
        s.on_option_clicked(3, 0);
        let views = s.question_views(Some(4));
        assert_eq!(views.len(), 10);
        assert_eq!(views[2].number, 3);
        assert_eq!(views[2].option_status(0), OptionStatus::Selected);
        assert!(views[3].flagged);
        assert!(!views[2].flagged);
        assert_eq!(s.progress_info().answered, 1);
    }

    #[test]
    fn results_and_header_after_grading() {
        let mut s = session();
        assert_eq!(s.best_score_label(), "-- / 10");
        assert!(s.results_info().is_none());

        let picks: Vec<_> = s.bank().questions().iter().map(|q| (q.id, q.correct_index)).collect();
        for (id, correct) in picks {
            s.on_option_clicked(id, correct);
        }
        s.on_submit_clicked();

        let results = s.results_info().unwrap();
        assert_eq!(results.total_score, 10);
        assert_eq!(results.max_score, 10);
        assert_eq!(results.per_topic[0].topic, Topic::Html);
        assert_eq!(results.per_topic[1].label(), "4 / 4");
        assert_eq!(results.best, 10);
        assert_eq!(s.best_score_label(), "10 / 10");

        let views = s.question_views(None);
        assert!(views.iter().all(|v| v.is_graded()));
    }

    #[test]
    fn retry_resets_progress_indicator() {
        let mut s = session();
        let picks: Vec<_> = s.bank().questions().iter().map(|q| (q.id, 0)).collect();
        for (id, pick) in picks {
            s.on_option_clicked(id, pick);
        }
        s.on_submit_clicked();
        s.on_retry_clicked();
        assert_eq!(s.progress_info().answered, 0);
        assert_eq!(s.progress_info().total, 10);
        assert!(s.question_views(None).iter().all(|v| v.selected.is_none() && !v.graded));
    }
}
