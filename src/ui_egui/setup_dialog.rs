//! First-run input prompts.
//!
//! Each prompt is a small native window with one text field. Closing the
//! window without confirming yields `None`, which the loader treats as a
//! blank answer.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Key, RichText};

use super::fonts;
use super::message::DIALOG_TITLE;
use crate::models::config::{DEFAULT_DATE, DEFAULT_TARGET, MAX_TARGET_CHARS};
use crate::services::config::{ConfigError, FirstRunPrompt};

const PROMPT_WIDTH: f32 = 380.0;
const PROMPT_HEIGHT: f32 = 140.0;

/// What a single prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub label: String,
    pub hint: &'static str,
    /// `None` leaves the field unbounded so validation sees the raw input.
    pub char_limit: Option<usize>,
}

impl PromptSpec {
    pub fn target() -> Self {
        Self {
            label: format!("请输入倒计时目标（最多{}个字，留空为“{}”）：", MAX_TARGET_CHARS, DEFAULT_TARGET),
            hint: DEFAULT_TARGET,
            char_limit: Some(MAX_TARGET_CHARS),
        }
    }

    pub fn date() -> Self {
        Self {
            label: format!("请输入目标日期 MMDD（留空为 {}）：", DEFAULT_DATE),
            hint: DEFAULT_DATE,
            char_limit: None,
        }
    }
}

/// Single-line field for `spec`, limited only when the prompt asks for it.
fn text_field<'t>(text: &'t mut String, spec: &PromptSpec) -> egui::TextEdit<'t> {
    egui::TextEdit::singleline(text)
        .hint_text(spec.hint)
        .char_limit(spec.char_limit.unwrap_or(usize::MAX))
        .desired_width(f32::INFINITY)
}

type AnswerSlot = Rc<RefCell<Option<String>>>;

struct InputDialog {
    spec: PromptSpec,
    text: String,
    answer: AnswerSlot,
    focus_requested: bool,
}

impl InputDialog {
    fn new(spec: PromptSpec, answer: AnswerSlot) -> Self {
        Self {
            spec,
            text: String::new(),
            answer,
            focus_requested: false,
        }
    }

    fn submit(&mut self, ctx: &egui::Context) {
        *self.answer.borrow_mut() = Some(self.text.clone());
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for InputDialog {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut submitted = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.spec.label).size(15.0));
            ui.add_space(6.0);

            let response = ui.add(text_field(&mut self.text, &self.spec));
            if !self.focus_requested {
                response.request_focus();
                self.focus_requested = true;
            }
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submitted = true;
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("确定").clicked() {
                    submitted = true;
                }
                if ui.button("取消").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        if submitted {
            self.submit(ctx);
        }
    }
}

/// Run one prompt window to completion and return what was confirmed.
pub fn ask_text(spec: PromptSpec) -> Result<Option<String>, ConfigError> {
    let answer: AnswerSlot = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&answer);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(DIALOG_TITLE)
            .with_inner_size([PROMPT_WIDTH, PROMPT_HEIGHT])
            .with_resizable(false)
            .with_always_on_top(),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        DIALOG_TITLE,
        options,
        Box::new(move |cc| {
            fonts::install_label_font(&cc.egui_ctx);
            Ok(Box::new(InputDialog::new(spec, slot)))
        }),
    )
    .map_err(|err| ConfigError::Prompt(err.to_string()))?;

    let value = answer.borrow_mut().take();
    Ok(value)
}

/// [`FirstRunPrompt`] backed by native prompt windows.
#[derive(Debug, Default)]
pub struct DialogPrompt;

impl FirstRunPrompt for DialogPrompt {
    fn ask_target(&mut self) -> Result<Option<String>, ConfigError> {
        let answer = ask_text(PromptSpec::target())?;
        log::debug!("target prompt answered: {:?}", answer);
        Ok(answer)
    }

    fn ask_date(&mut self) -> Result<Option<String>, ConfigError> {
        let answer = ask_text(PromptSpec::date())?;
        log::debug!("date prompt answered: {:?}", answer);
        Ok(answer)
    }
}
