use serde::{Deserialize, Serialize};
use std::fmt;

pub type QuestionId = u32;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Topic {
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "CSS")]
    Css,
    JavaScript,
}

impl Topic {
    /// Orden fijo en el que se muestran los temas en los resultados
    pub const ALL: [Topic; 3] = [Topic::Html, Topic::Css, Topic::JavaScript];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Html => "HTML",
            Topic::Css => "CSS",
            Topic::JavaScript => "JavaScript",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub topic: Topic,
    pub prompt: String,       // Pregunta
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// Estado visual de cada opción; el renderer decide los colores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OptionStatus {
    #[default]
    None,
    Selected,
    Correct,
    SelectedWrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    InProgress,
    Submitted,
}
