use crate::QuizApp;
use crate::ui::helpers::topic_badge;
use crate::ui::layout::two_button_row;
use egui::{Align2, Context, Grid, RichText, Window};

const RESULTS_WIDTH: f32 = 280.0;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    // Sin corrección no hay nada que mostrar
    let Some(results) = app.session.results_info() else {
        app.show_results = false;
        return;
    };

    let mut retry = false;
    let mut review = false;

    Window::new("Assessment Results")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_width(RESULTS_WIDTH);
            ui.vertical_centered(|ui| {
                ui.label("Your score");
                ui.label(
                    RichText::new(format!("{} / {}", results.total_score, results.max_score))
                        .heading()
                        .strong(),
                );
            });
            ui.add_space(10.0);

            Grid::new("topic_scores_grid")
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for row in &results.per_topic {
                        topic_badge(ui, row.topic);
                        ui.label(row.label());
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.label(format!("🏆 Best score: {} / {}", results.best, results.max_score));
            ui.add_space(12.0);

            (retry, review) = two_button_row(ui, RESULTS_WIDTH, "⟲ Retry Quiz", "Review answers");
        });

    if retry {
        app.reintentar();
    } else if review {
        app.revisar_respuestas();
    }
}
