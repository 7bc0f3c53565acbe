use super::answers::AnswerState;
use crate::data::QuestionBank;
use crate::model::Topic;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopicScore {
    pub correct: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradeReport {
    pub total: u32,
    pub per_topic: BTreeMap<Topic, TopicScore>,
}

impl GradeReport {
    pub fn topic(&self, topic: Topic) -> TopicScore {
        self.per_topic.get(&topic).copied().unwrap_or_default()
    }

    pub fn max_score(&self) -> u32 {
        self.per_topic.values().map(|s| s.total).sum()
    }
}

/// Corrige todas las preguntas. Función pura: no bloquea ni guarda nada.
/// Una pregunta sin responder cuenta como fallo.
pub fn grade(bank: &QuestionBank, answers: &AnswerState) -> GradeReport {
    let mut per_topic: BTreeMap<Topic, TopicScore> = Topic::ALL
        .iter()
        .map(|t| (*t, TopicScore::default()))
        .collect();
    let mut total = 0;

    for q in bank.questions() {
        let score = per_topic.entry(q.topic).or_default();
        score.total += 1;
        if answers.selection(q.id).is_some_and(|i| q.is_correct(i)) {
            total += 1;
            score.correct += 1;
        }
    }

    GradeReport { total, per_topic }
}
