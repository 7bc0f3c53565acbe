use club_quiz::QuizApp;
use club_quiz::config::QuizConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::from_env();
    let title = config.app_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::new(cc, config)?))),
    )
}

// ===== SOLO PARA WEB =====
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    let config = QuizConfig::from_env();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            log::error!("canvas #the_canvas_id not found in page");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(QuizApp::new(cc, config)?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("failed to start the quiz: {e:?}");
        }
    });
}
