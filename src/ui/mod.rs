mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // CABECERA CON MEJOR PUNTUACIÓN Y PROGRESO
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        views::quiz::ui_quiz(self, ctx);

        if self.show_results {
            views::results::ui_results(self, ctx);
        }

        // El récord se escribe en el mismo frame en que se corrige
        if let Some(storage) = frame.storage_mut() {
            self.flush_pending(storage);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.session.store().flush_into(storage);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(5)
    }
}
