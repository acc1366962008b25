use config::Config;
use display::impl_gui::{native_options, StartupFailureGui, WasteClassifierGui};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;
use waste_classifier::main::WasteClassifier;

mod bin_registry;
mod class_labels;
mod config;
mod display;
mod error;
mod image_classifier;
mod library;
mod prediction;
mod session_history;
mod startup;
mod upload;
mod waste_classifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let options = native_options(&config.window_title);

    match startup::boot(&config, logger.clone()) {
        Ok(services) => {
            let session = WasteClassifier::new(config.clone(), logger.clone(), services);
            eframe::run_native(
                &config.window_title,
                options,
                Box::new(move |_cc| Box::new(WasteClassifierGui::new(session))),
            )?;
            Ok(())
        }
        Err(e) => {
            let diagnostic = e.to_string();
            let _ = logger.error(&diagnostic);
            eframe::run_native(
                &config.window_title,
                options,
                Box::new(move |_cc| Box::new(StartupFailureGui::new(diagnostic))),
            )?;
            Err(e.into())
        }
    }
}
