//! Blocking modal dialogs used around startup.

use std::error::Error as _;

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::services::config::{ConfigError, ConfigSource, LoadedConfig};

pub const DIALOG_TITLE: &str = "倒计时";

/// Text of a modal dialog, kept separate from showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub title: String,
    pub body: String,
}

/// Confirmation shown once the configuration is ready.
pub fn config_ready_text(loaded: &LoadedConfig) -> DialogText {
    let config = &loaded.config;
    let body = match loaded.source {
        ConfigSource::Created => format!(
            "配置已保存到 {}\n目标：{}\n日期：{:02}月{:02}日",
            loaded.path.display(),
            config.target,
            config.month,
            config.day
        ),
        ConfigSource::Existing => format!(
            "正在使用配置文件 {}\n目标：{}\n日期：{:02}月{:02}日",
            loaded.path.display(),
            config.target,
            config.month,
            config.day
        ),
    };
    DialogText {
        title: DIALOG_TITLE.to_string(),
        body,
    }
}

/// Fatal error text. Problems in an existing file tell the user to delete it.
pub fn config_error_text(err: &ConfigError) -> DialogText {
    let body = match err {
        ConfigError::Stored { path, source } => format!(
            "配置文件无效：{}\n{}\n\n请删除该文件后重新运行程序。",
            path.display(),
            describe_chain(source.as_ref())
        ),
        ConfigError::InvalidDateFormat(_) | ConfigError::ImpossibleDate { .. } => {
            format!("日期输入无效：{}\n请输入4位数字的有效日期，例如 0607。", err)
        }
        other => format!("无法完成设置：{}", describe_chain(other)),
    };
    DialogText {
        title: format!("{} - 错误", DIALOG_TITLE),
        body,
    }
}

fn describe_chain(err: &ConfigError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

pub fn show_info(text: &DialogText) {
    show(text, MessageLevel::Info);
}

pub fn show_error(text: &DialogText) {
    show(text, MessageLevel::Error);
}

fn show(text: &DialogText, level: MessageLevel) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(text.title.as_str())
        .set_description(text.body.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}
