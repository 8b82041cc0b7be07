// egui-based UI: first-run prompts, modal messages and the overlay window

pub mod fonts;
pub mod message;
pub mod overlay;
pub mod setup_dialog;
