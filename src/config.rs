// src/config.rs

pub const DEFAULT_APP_TITLE: &str = "Club Enrollment Quiz";
pub const DEFAULT_BEST_SCORE_KEY: &str = "quiz_best_score";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub app_title: String,
    /// Clave bajo la que se guarda la mejor puntuación
    pub best_score_key: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            best_score_key: DEFAULT_BEST_SCORE_KEY.to_string(),
        }
    }
}

impl QuizConfig {
    /// Prioridad: variable de entorno (solo nativo) > valor de compilación > defecto
    pub fn from_env() -> Self {
        let best_score_key = key_from_runtime_env()
            .or_else(key_from_build_env)
            .unwrap_or_else(|| DEFAULT_BEST_SCORE_KEY.to_string());

        Self {
            best_score_key,
            ..Self::default()
        }
    }
}

fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn key_from_build_env() -> Option<String> {
    option_env!("CLUB_QUIZ_BEST_SCORE_KEY").and_then(normalize_key)
}

#[cfg(not(target_arch = "wasm32"))]
fn key_from_runtime_env() -> Option<String> {
    std::env::var("CLUB_QUIZ_BEST_SCORE_KEY")
        .ok()
        .as_deref()
        .and_then(normalize_key)
}

#[cfg(target_arch = "wasm32")]
fn key_from_runtime_env() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_key() {
        let config = QuizConfig::default();
        assert_eq!(config.best_score_key, "quiz_best_score");
        assert_eq!(config.app_title, "Club Enrollment Quiz");
    }

    #[test]
    fn blank_keys_are_ignored() {
        assert_eq!(normalize_key("   "), None);
        assert_eq!(normalize_key(" my_key "), Some("my_key".to_string()));
    }
}
