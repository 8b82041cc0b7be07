//! Stacking the overlay between the desktop and normal windows.
//!
//! `place_below_normal_windows` is best effort: when the platform call is
//! unavailable or fails the overlay just keeps its default stacking.

// ── Windows implementation ──────────────────────────────────────────────────

#[cfg(target_os = "windows")]
mod platform {
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        SetWindowPos, HWND_BOTTOM, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    };

    pub fn place_below_normal_windows(_ctx: &egui::Context, frame: &eframe::Frame) -> bool {
        let handle = match frame.window_handle() {
            Ok(handle) => handle,
            Err(err) => {
                log::debug!("No native window handle for layering: {}", err);
                return false;
            }
        };

        let RawWindowHandle::Win32(win32) = handle.as_raw() else {
            log::debug!("Unexpected window handle kind; skipping layering");
            return false;
        };

        let hwnd = HWND(win32.hwnd.get());
        let result = unsafe {
            SetWindowPos(
                hwnd,
                HWND_BOTTOM,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                log::debug!("SetWindowPos(HWND_BOTTOM) failed: {}", err);
                false
            }
        }
    }
}

// ── Other platforms ─────────────────────────────────────────────────────────

#[cfg(not(target_os = "windows"))]
mod platform {
    /// winit's bottom window level is the closest portable equivalent of
    /// lowering the window beneath its siblings.
    pub fn place_below_normal_windows(ctx: &egui::Context, _frame: &eframe::Frame) -> bool {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(
            egui::WindowLevel::AlwaysOnBottom,
        ));
        true
    }
}

pub use platform::place_below_normal_windows;
