use colored::*;

use crate::parser::VideoEntry;

/// 漂亮的日志输出工具
pub struct PrettyLogger;

impl PrettyLogger {
    /// 显示成功消息
    pub fn success(message: impl AsRef<str>) {
        println!("{} {}", "✓".green().bold(), message.as_ref());
    }

    /// 显示信息消息
    pub fn info(message: impl AsRef<str>) {
        println!("{} {}", "ℹ".blue().bold(), message.as_ref());
    }

    /// 显示警告消息
    pub fn warning(message: impl AsRef<str>) {
        println!("{} {}", "⚠".yellow().bold(), message.as_ref());
    }

    /// 显示错误消息
    pub fn error(message: impl AsRef<str>) {
        println!("{} {}", "✗".red().bold(), message.as_ref());
    }

    /// 显示步骤开始
    pub fn step_start(step: impl AsRef<str>) {
        println!("\n{} {}", "▶".cyan().bold(), step.as_ref().bold());
    }

    /// 显示一条视频条目
    pub fn video_entry(index: usize, entry: &VideoEntry) {
        let published = entry
            .published_at()
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!(
            "{:>3}. {} {} {}",
            index + 1,
            published.bright_black(),
            entry.title.bold(),
            entry.video_id.cyan()
        );
    }

    /// 显示匹配结果
    pub fn match_found(slug: impl AsRef<str>, entry: &VideoEntry) {
        println!(
            "{} {} → {} ({})",
            "🎬".magenta().bold(),
            slug.as_ref().bold(),
            entry.title,
            entry.embed_url().cyan()
        );
    }

    /// 显示未匹配
    pub fn no_match(slug: impl AsRef<str>, key: impl AsRef<str>) {
        println!(
            "{} {} (key: {})",
            "∅".bright_black().bold(),
            slug.as_ref().bold(),
            key.as_ref().bright_black()
        );
    }

    /// 显示分割线
    pub fn separator() {
        println!("{}", "─".repeat(50).bright_black());
    }
}

/// 便捷宏用于漂亮的日志输出
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::success(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::info(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::warning(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_step {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::step_start(format!($($arg)*))
    };
}
