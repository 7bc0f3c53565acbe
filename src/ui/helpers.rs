// src/ui/helpers.rs
use crate::model::{OptionStatus, Topic};
use egui::{Color32, RichText, Ui};

pub const CORRECT_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
pub const WRONG_COLOR: Color32 = Color32::from_rgb(215, 58, 73);

pub fn topic_color(topic: Topic) -> Color32 {
    match topic {
        Topic::Html => Color32::from_rgb(227, 76, 38),
        Topic::Css => Color32::from_rgb(38, 77, 228),
        Topic::JavaScript => Color32::from_rgb(240, 219, 79),
    }
}

pub fn topic_badge(ui: &mut Ui, topic: Topic) {
    let text_color = match topic {
        Topic::JavaScript => Color32::BLACK,
        _ => Color32::WHITE,
    };
    ui.label(
        RichText::new(format!(" {} ", topic.label()))
            .small()
            .strong()
            .color(text_color)
            .background_color(topic_color(topic)),
    );
}

/// Traduce el estado de la opción a texto con color.
pub fn option_text(label: &str, status: OptionStatus) -> RichText {
    match status {
        OptionStatus::None => RichText::new(label),
        OptionStatus::Selected => RichText::new(label).strong(),
        OptionStatus::Correct => RichText::new(format!("{label}  ✔"))
            .strong()
            .color(CORRECT_COLOR),
        OptionStatus::SelectedWrong => RichText::new(format!("{label}  ✘"))
            .strikethrough()
            .color(WRONG_COLOR),
    }
}
