// src/view_models.rs

use crate::model::{OptionStatus, QuestionId, Topic};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub number: usize, // número "humano" (1,2,3…)
    pub topic: Topic,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub graded: bool,
    pub correct_index: usize,
    pub flagged: bool, // pendiente tras un envío incompleto
}

impl QuestionView {
    pub fn is_selected(&self, option: usize) -> bool {
        self.selected == Some(option)
    }

    pub fn is_graded(&self) -> bool {
        self.graded
    }

    /// Solo se revela después de corregir.
    pub fn is_correct_option(&self, option: usize) -> bool {
        self.graded && option == self.correct_index
    }

    pub fn is_wrong_selected_option(&self, option: usize) -> bool {
        self.graded && self.is_selected(option) && option != self.correct_index
    }

    pub fn option_status(&self, option: usize) -> OptionStatus {
        if self.is_correct_option(option) {
            OptionStatus::Correct
        } else if self.is_wrong_selected_option(option) {
            OptionStatus::SelectedWrong
        } else if !self.graded && self.is_selected(option) {
            OptionStatus::Selected
        } else {
            OptionStatus::None
        }
    }

    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressInfo {
    pub answered: usize,
    pub total: usize,
}

impl ProgressInfo {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f32 / self.total as f32
        }
    }

    pub fn label(&self) -> String {
        format!("{} / {} answered", self.answered, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub topic: Topic,
    pub correct: u32,
    pub total: u32,
}

impl TopicRow {
    pub fn label(&self) -> String {
        format!("{} / {}", self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsInfo {
    pub total_score: u32,
    pub max_score: u32,
    pub per_topic: Vec<TopicRow>,
    pub best: u32,
}

/// Texto de cabecera: "8 / 10" o "-- / 10" si nunca se guardó.
pub fn best_score_label(best: Option<u32>, total: usize) -> String {
    match best {
        Some(score) => format!("{score} / {total}"),
        None => format!("-- / {total}"),
    }
}
