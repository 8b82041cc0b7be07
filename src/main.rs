// Countdown Overlay
// Main entry point

// Hide console window on Windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;

use countdown_overlay::services::config::{default_config_path, load_or_create};
use countdown_overlay::services::countdown::resolve_target_instant;
use countdown_overlay::ui_egui::message::{self, DialogText, DIALOG_TITLE};
use countdown_overlay::ui_egui::overlay::run_overlay;
use countdown_overlay::ui_egui::setup_dialog::DialogPrompt;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Countdown Overlay");

    match run() {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            message::show_error(&DialogText {
                title: format!("{} - 错误", DIALOG_TITLE),
                body: format!("{:#}", err),
            });
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let path = default_config_path();
    let today = Local::now().date_naive();

    let loaded = match load_or_create(&path, today, &mut DialogPrompt) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("Configuration rejected: {}", err);
            message::show_error(&message::config_error_text(&err));
            return Ok(ExitCode::FAILURE);
        }
    };
    message::show_info(&message::config_ready_text(&loaded));

    let config = &loaded.config;
    let now = Local::now().naive_local();
    let target_instant = resolve_target_instant(now, config.month, config.day)
        .with_context(|| format!("no calendar date matches {}", config.mmdd()))?;
    log::info!(
        "Counting down to {} on {}",
        config.target,
        target_instant.format("%Y-%m-%d")
    );

    run_overlay(&config.target, target_instant)?;
    log::info!("Overlay closed");
    Ok(ExitCode::SUCCESS)
}
