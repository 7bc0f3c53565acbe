use crate::QuizApp;
use egui::{Align, Button, Context, Layout, ProgressBar, RichText, Ui, Visuals};

/// Cabecera: título, mejor puntuación y barra de progreso.
pub fn top_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(&app.config.app_title);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(app.session.best_score_label()).strong());
                ui.label("🏆 Best score:");
            });
        });

        let progress = app.session.progress_info();
        ui.add(ProgressBar::new(progress.fraction()).text(progress.label()));
        ui.add_space(6.0);
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let dark = ctx.style().visuals.dark_mode;
            let label = if dark { "☀ Light mode" } else { "🌙 Dark mode" };
            if ui.button(label).clicked() {
                ctx.set_visuals(if dark { Visuals::light() } else { Visuals::dark() });
            }
        });
    });
}

/// Fila de dos botones iguales, centrada dentro de `row_width`.
/// Devuelve (izquierdo, derecho).
pub fn two_button_row(ui: &mut Ui, row_width: f32, left: &str, right: &str) -> (bool, bool) {
    let gap = ui.spacing().item_spacing.x;
    let button = egui::vec2((row_width - gap) / 2.0, 36.0);
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
        let left = ui.add_sized(button, Button::new(left)).clicked();
        let right = ui.add_sized(button, Button::new(right)).clicked();
        (left, right)
    })
    .inner
}
