use egui::epaint::Mesh;
use egui::{Align2, Color32, FontFamily, FontId, Pos2, Rect};

pub(super) const PANEL_WIDTH: f32 = 640.0;
pub(super) const PANEL_HEIGHT: f32 = 50.0;
const CORNER_RADIUS: f32 = 15.0;
const CORNER_SEGMENTS: usize = 8;
/// 20pt at 96 dpi.
const LABEL_FONT_SIZE: f32 = 26.0;

const GRADIENT_TOP: RgbaColor = RgbaColor::new(68, 64, 60, 220);
const GRADIENT_BOTTOM: RgbaColor = RgbaColor::new(28, 25, 23, 220);

/// Straight (non-premultiplied) colour used for the gradient stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Linear blend towards `other`; `t` is clamped to `0..=1`.
    pub fn lerp(self, other: RgbaColor, t: f32) -> RgbaColor {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        RgbaColor::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

fn rgba_to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Outline of a rounded rectangle, clockwise from the top-left corner.
pub fn rounded_rect_outline(rect: Rect, radius: f32, segments: usize) -> Vec<Pos2> {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let segments = segments.max(1);

    // (corner centre, start angle) in screen space where +y points down
    let corners = [
        (Pos2::new(rect.left() + radius, rect.top() + radius), 180.0_f32),
        (Pos2::new(rect.right() - radius, rect.top() + radius), 270.0),
        (Pos2::new(rect.right() - radius, rect.bottom() - radius), 0.0),
        (Pos2::new(rect.left() + radius, rect.bottom() - radius), 90.0),
    ];

    let mut points = Vec::with_capacity(corners.len() * (segments + 1));
    for (centre, start) in corners {
        for step in 0..=segments {
            let angle = (start + 90.0 * step as f32 / segments as f32).to_radians();
            points.push(Pos2::new(
                centre.x + radius * angle.cos(),
                centre.y + radius * angle.sin(),
            ));
        }
    }
    points
}

/// Triangle fan over the rounded outline with colour varying along y.
pub fn gradient_rounded_rect(rect: Rect, radius: f32, top: RgbaColor, bottom: RgbaColor) -> Mesh {
    let outline = rounded_rect_outline(rect, radius, CORNER_SEGMENTS);
    let color_at = |y: f32| {
        let t = if rect.height() > 0.0 {
            (y - rect.top()) / rect.height()
        } else {
            0.0
        };
        rgba_to_color32(top.lerp(bottom, t))
    };

    let mut mesh = Mesh::default();
    let centre = rect.center();
    mesh.colored_vertex(centre, color_at(centre.y));
    for point in &outline {
        mesh.colored_vertex(*point, color_at(point.y));
    }

    let ring = outline.len() as u32;
    for i in 0..ring {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % ring);
    }
    mesh
}

/// Paint the background panel and the centred countdown label.
pub(super) fn paint_overlay(painter: &egui::Painter, rect: Rect, text: &str) {
    painter.add(egui::Shape::mesh(gradient_rounded_rect(
        rect,
        CORNER_RADIUS,
        GRADIENT_TOP,
        GRADIENT_BOTTOM,
    )));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::new(LABEL_FONT_SIZE, FontFamily::Proportional),
        Color32::WHITE,
    );
}

/// Borderless, transparent, click-through panel that never takes focus.
pub(super) fn viewport_builder_for_overlay(title: &str) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(title)
        .with_inner_size([PANEL_WIDTH, PANEL_HEIGHT])
        .with_min_inner_size([PANEL_WIDTH, PANEL_HEIGHT])
        .with_max_inner_size([PANEL_WIDTH, PANEL_HEIGHT])
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true)
        .with_mouse_passthrough(true)
        .with_active(false)
        .with_taskbar(false)
}
