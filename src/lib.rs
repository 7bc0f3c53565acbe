pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::QuizError;
