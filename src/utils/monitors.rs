//! Primary display geometry for placing the overlay.
//!
//! On Windows, uses the Win32 `MonitorFromPoint` / `GetMonitorInfoW` APIs
//! to read the full rectangle of the primary monitor (in physical pixels).
//!
//! On other platforms, falls back to the egui viewport's `monitor_size`
//! field, which egui reports once the first frame has run.

/// A monitor rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MonitorRect {
    /// Convert physical pixels to egui points.
    pub fn scaled(&self, pixels_per_point: f32) -> MonitorRect {
        let ppp = if pixels_per_point > 0.0 {
            pixels_per_point
        } else {
            1.0
        };
        MonitorRect {
            x: self.x / ppp,
            y: self.y / ppp,
            width: self.width / ppp,
            height: self.height / ppp,
        }
    }

    /// Top-left corner that centres a window of `width` along the top edge.
    pub fn top_centre_origin(&self, width: f32) -> (f32, f32) {
        let x = self.x + ((self.width - width) / 2.0).floor();
        (x, self.y)
    }
}

// ── Windows implementation ──────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod platform {
    use super::MonitorRect;

    use windows::Win32::Foundation::POINT;
    use windows::Win32::Graphics::Gdi::{
        GetMonitorInfoW, MonitorFromPoint, MONITORINFO, MONITOR_DEFAULTTOPRIMARY,
    };

    /// The primary monitor always contains the virtual-screen origin.
    pub fn primary_monitor() -> Option<MonitorRect> {
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        let found = unsafe {
            let hmonitor = MonitorFromPoint(POINT { x: 0, y: 0 }, MONITOR_DEFAULTTOPRIMARY);
            GetMonitorInfoW(hmonitor, &mut info).as_bool()
        };

        if !found {
            log::warn!("Win32 GetMonitorInfoW failed for the primary monitor");
            return None;
        }

        // rcMonitor rather than rcWork: the overlay sits at the very top
        let area = info.rcMonitor;
        Some(MonitorRect {
            x: area.left as f32,
            y: area.top as f32,
            width: (area.right - area.left) as f32,
            height: (area.bottom - area.top) as f32,
        })
    }
}

// ── Non-Windows fallback ────────────────────────────────────────────────────

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::MonitorRect;

    /// No portable way to query monitors without extra dependencies; the
    /// caller falls back to egui's `monitor_size`.
    pub fn primary_monitor() -> Option<MonitorRect> {
        None
    }
}

pub use platform::primary_monitor;

/// Primary monitor in egui points, falling back to a monitor of
/// `egui_monitor_size` at the origin when the platform has no answer.
pub fn primary_monitor_points(
    platform_monitor: Option<MonitorRect>,
    egui_monitor_size: Option<(f32, f32)>,
    pixels_per_point: f32,
) -> Option<MonitorRect> {
    if let Some(monitor) = platform_monitor {
        return Some(monitor.scaled(pixels_per_point));
    }

    egui_monitor_size.map(|(width, height)| MonitorRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
    })
}
