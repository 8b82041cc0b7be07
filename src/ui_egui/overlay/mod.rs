//! The countdown overlay window.
//!
//! One borderless, click-through panel that recomputes its label once a
//! minute and asks the platform to keep it beneath normal windows shortly
//! after it first appears.

mod render;
mod timer;

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};
use egui::{LayerId, ViewportCommand};

use self::render::{paint_overlay, viewport_builder_for_overlay, PANEL_WIDTH};
use self::timer::{DeferredOnce, RefreshTimer};
use crate::services::countdown::CountdownDisplay;
use crate::ui_egui::fonts;
use crate::utils::layering::place_below_normal_windows;
use crate::utils::monitors::{primary_monitor, primary_monitor_points, MonitorRect};

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);
/// Lets the window system finish initial placement before restacking.
pub const LAYERING_DELAY: Duration = Duration::from_millis(100);
const POSITION_RETRY: Duration = Duration::from_millis(50);
const WINDOW_TITLE: &str = "倒计时";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Constructed, nothing painted yet.
    Uninitialized,
    /// Painting and ticking until the process exits.
    Running,
}

pub struct CountdownOverlay {
    display: CountdownDisplay,
    phase: OverlayPhase,
    refresh: RefreshTimer,
    layering: DeferredOnce,
    platform_monitor: Option<MonitorRect>,
    positioned: bool,
}

impl CountdownOverlay {
    pub fn new(target: impl Into<String>, target_instant: NaiveDateTime) -> Self {
        Self::with_clock(
            target,
            target_instant,
            Local::now().naive_local(),
            Instant::now(),
        )
    }

    /// Construct against explicit clocks. The label is computed right away.
    pub fn with_clock(
        target: impl Into<String>,
        target_instant: NaiveDateTime,
        now: NaiveDateTime,
        started: Instant,
    ) -> Self {
        let display = CountdownDisplay::new(target, target_instant, now);
        log::info!("Countdown initialised: {}", display.text());
        Self {
            display,
            phase: OverlayPhase::Uninitialized,
            refresh: RefreshTimer::new(REFRESH_INTERVAL, started),
            layering: DeferredOnce::new(LAYERING_DELAY, started),
            platform_monitor: primary_monitor(),
            positioned: false,
        }
    }

    pub fn display(&self) -> &CountdownDisplay {
        &self.display
    }

    /// Recompute the label if the refresh interval has elapsed.
    pub fn poll_refresh(&mut self, now: NaiveDateTime, instant: Instant) -> bool {
        if !self.refresh.poll(instant) {
            return false;
        }
        let changed = self.display.refresh(now);
        if changed {
            log::info!("Countdown updated: {}", self.display.text());
        }
        changed
    }

    fn place_window(&mut self, ctx: &egui::Context) {
        let (monitor_size, pixels_per_point) = ctx.input(|input| {
            let info = input.viewport();
            (
                info.monitor_size.map(|size| (size.x, size.y)),
                info.native_pixels_per_point.unwrap_or(1.0),
            )
        });

        let Some(monitor) =
            primary_monitor_points(self.platform_monitor, monitor_size, pixels_per_point)
        else {
            return;
        };

        let (x, y) = monitor.top_centre_origin(PANEL_WIDTH);
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(egui::pos2(x, y)));
        self.positioned = true;
        log::debug!("Overlay placed at ({}, {}) on monitor {:?}", x, y, monitor);
    }

    fn next_wake(&self, now: Instant) -> Duration {
        let mut wait = self.refresh.time_until_due(now);
        if let Some(layering) = self.layering.time_until_due(now) {
            wait = wait.min(layering);
        }
        if !self.positioned {
            wait = wait.min(POSITION_RETRY);
        }
        wait
    }
}

impl eframe::App for CountdownOverlay {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.phase == OverlayPhase::Uninitialized {
            self.phase = OverlayPhase::Running;
            log::debug!("Overlay running");
        }

        if !self.positioned {
            self.place_window(ctx);
        }

        if self.layering.poll(now) {
            let applied = place_below_normal_windows(ctx, frame);
            log::debug!("Below-normal layering applied: {}", applied);
        }

        self.poll_refresh(Local::now().naive_local(), now);

        let painter = ctx.layer_painter(LayerId::background());
        paint_overlay(&painter, ctx.screen_rect(), self.display.text());

        ctx.request_repaint_after(self.next_wake(now));
    }
}

/// Open the overlay and block until its window closes.
pub fn run_overlay(target: &str, target_instant: NaiveDateTime) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: viewport_builder_for_overlay(WINDOW_TITLE),
        ..Default::default()
    };

    let target = target.to_string();
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            fonts::install_label_font(&cc.egui_ctx);
            Ok(Box::new(CountdownOverlay::new(target, target_instant)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("overlay event loop failed: {}", err))
}
