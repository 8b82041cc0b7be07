//! Bold CJK font for the overlay label and the setup prompts.
//!
//! egui's bundled fonts carry no Chinese glyphs, so a system font is loaded
//! from a short list of well-known locations and placed first in the
//! proportional family.

use std::path::{Path, PathBuf};

use egui::{FontData, FontDefinitions, FontFamily};

const LABEL_FONT_NAME: &str = "label-cjk-bold";

#[cfg(target_os = "windows")]
const FONT_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msyhbd.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

#[cfg(target_os = "macos")]
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/wqy-zenhei/wqy-zenhei.ttc",
];

/// First path in `candidates` that exists on disk.
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Install the label font into `ctx`. Returns false if none was found, in
/// which case egui keeps its defaults and CJK text renders as boxes.
pub fn install_label_font(ctx: &egui::Context) -> bool {
    let Some(path) = first_existing(FONT_CANDIDATES) else {
        log::warn!("No CJK font found; label text may not render");
        return false;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("Failed to read font {}: {}", path.display(), err);
            return false;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(LABEL_FONT_NAME.to_owned(), FontData::from_owned(bytes));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, LABEL_FONT_NAME.to_owned());
    ctx.set_fonts(fonts);

    log::debug!("Using label font {}", path.display());
    true
}
