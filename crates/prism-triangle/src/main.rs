mod app;
mod config;
mod scene;

use anyhow::Result;
use prism_engine::logging::init_logging;
use prism_engine::window::Runtime;

use app::TriangleApp;
use config::AppConfig;

fn run(config: AppConfig) -> Result<i32> {
    let app = TriangleApp::new(&config);
    let app = Runtime::run(config.runtime, config.gpu, app)?;
    Ok(app.exit_code())
}

fn main() {
    let config = AppConfig::default();
    init_logging(config.logging.clone());

    let code = match run(config) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            -1
        }
    };

    std::process::exit(code);
}
