use crate::QuizApp;
use crate::model::{QuestionId, QuizPhase};
use crate::ui::helpers::{WRONG_COLOR, option_text, topic_badge};
use egui::{Align, Button, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Stroke};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let views = app.session.question_views(app.flagged);
    let graded = app.session.phase() == QuizPhase::Submitted;
    let scroll_to = app.scroll_to.take();
    let scroll_to_top = std::mem::take(&mut app.scroll_to_top);

    let mut clicked: Option<(QuestionId, usize)> = None;
    let mut submit = false;
    let mut open_results = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        let mut area = ScrollArea::vertical().auto_shrink([false; 2]);
        if scroll_to_top {
            area = area.vertical_scroll_offset(0.0);
        }

        area.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                for view in &views {
                    let stroke = if view.flagged {
                        Stroke::new(2.0, WRONG_COLOR)
                    } else {
                        ui.visuals().widgets.noninteractive.bg_stroke
                    };

                    let card = Frame::default()
                        .fill(ui.visuals().window_fill())
                        .stroke(stroke)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                                topic_badge(ui, view.topic);
                                ui.add_space(4.0);
                                ui.label(RichText::new(view.heading()).strong());
                                ui.add_space(6.0);

                                // Tras corregir los clics siguen llegando a la sesión, que los ignora
                                for (oi, option) in view.options.iter().enumerate() {
                                    let text = option_text(option, view.option_status(oi));
                                    if ui.radio(view.is_selected(oi), text).clicked() {
                                        clicked = Some((view.id, oi));
                                    }
                                }
                            });
                        })
                        .response;

                    if scroll_to == Some(view.id) {
                        card.scroll_to_me(Some(Align::Center));
                    }
                    ui.add_space(10.0);
                }

                ui.add_space(8.0);
                let label = if graded {
                    "Assessment Submitted"
                } else {
                    "Submit Assessment"
                };
                if ui
                    .add_enabled(!graded, Button::new(label).min_size(egui::vec2(240.0, 40.0)))
                    .clicked()
                {
                    submit = true;
                }

                if graded && !app.show_results && ui.button("📊 Show results").clicked() {
                    open_results = true;
                }

                if !app.message.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
                }
                ui.add_space(16.0);
            });
        });
    });

    if let Some((id, oi)) = clicked {
        app.elegir_opcion(id, oi);
    }
    if submit {
        app.enviar();
    }
    if open_results {
        app.show_results = true;
    }
}
