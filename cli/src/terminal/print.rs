use std::fmt::Display;

use crate::terminal::{banner, colors, logging::PRINT_TARGET};
use colored::*;
use labkit_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 12;

#[macro_export]
macro_rules! lprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Right-hand side of an [`aligned_line`].
///
/// Plain text is drawn in [`colors::TEXT_DEFAULT`]; styled text keeps its style.
pub enum Field {
    Plain(String),
    Styled(ColoredString),
}

impl Field {
    fn paint(self) -> ColoredString {
        match self {
            Field::Plain(text) => text.color(colors::TEXT_DEFAULT),
            Field::Styled(styled) => styled,
        }
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Field::Plain(text)
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field::Plain(text.to_owned())
    }
}

impl From<ColoredString> for Field {
    fn from(styled: ColoredString) -> Self {
        Field::Styled(styled)
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.is_quiet() {
        return;
    }

    let title: String = format!("⟦ LABKIT v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&titled_rule('═', title.bright_green().bold(), title.width()));
    banner::print();
}

/// Section title centered in a thin rule, hidden when quiet.
pub fn header(msg: &str, cfg: &Config) {
    if cfg.is_quiet() {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&titled_rule('─', title.bright_green(), title.width()));
}

pub fn fat_separator() {
    print(&rule('═', TOTAL_WIDTH).to_string());
}

/// `> key.......: value`, with keys padded to a shared column.
pub fn aligned_line(key: &str, value: impl Into<Field>) {
    let pad: ColoredString = rule('.', (KEY_WIDTH + 1).saturating_sub(key.width()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        pad,
        ":".color(colors::SEPARATOR),
        value.into().paint()
    ));
}

/// Joins values with spaces, or `(empty)` when there are none.
pub fn sequence<T: Display>(values: impl IntoIterator<Item = T>) -> String {
    let joined: String = values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        String::from("(empty)")
    } else {
        joined
    }
}

pub fn end_of_program(cfg: &Config) {
    if !cfg.is_quiet() {
        fat_separator();
    }
}

fn rule(fill: char, width: usize) -> ColoredString {
    fill.to_string().repeat(width).color(colors::SEPARATOR)
}

/// `title` (display width `title_width`) between two rules of `fill`.
/// The right rule takes the odd column.
fn titled_rule(fill: char, title: ColoredString, title_width: usize) -> String {
    let (left, right) = rule_widths(title_width);
    format!("{}{}{}", rule(fill, left), title, rule(fill, right))
}

fn rule_widths(title_width: usize) -> (usize, usize) {
    let free: usize = TOTAL_WIDTH.saturating_sub(title_width);
    (free / 2, free - free / 2)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titled_rule_spans_total_width() {
        for title in ["⟦ FAST POWER ⟧", "⟦ SORT TRACE ⟧", "⟦ LABKIT v0.1.0 ⟧"] {
            let (left, right) = rule_widths(title.width());
            assert_eq!(left + title.width() + right, TOTAL_WIDTH);
            assert!(right - left <= 1);
        }

        assert_eq!(rule_widths(TOTAL_WIDTH + 10), (0, 0));
    }

    #[test]
    fn test_field_keeps_explicit_style() {
        let plain: ColoredString = Field::from("3x4").paint();
        assert_eq!(plain, "3x4".color(colors::TEXT_DEFAULT));

        let styled: ColoredString = Field::from("3".bright_yellow().bold()).paint();
        assert_eq!(styled, "3".bright_yellow().bold());
    }

    #[test]
    fn test_sequence() {
        assert_eq!(sequence([3, 1, 2]), "3 1 2");
        assert_eq!(sequence(Vec::<i32>::new()), "(empty)");
    }
}
