use colored::Colorize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static PLAIN_OUTPUT: AtomicBool = AtomicBool::new(false);

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Disables colour codes, e.g. when output is consumed by a script.
pub fn set_plain(plain: bool) {
    PLAIN_OUTPUT.store(plain, Ordering::Relaxed);
    if plain {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

fn styled_label(kind: MessageKind) -> String {
    let label = match kind {
        MessageKind::Info => "INFO:",
        MessageKind::Success => "OK:",
        MessageKind::Warning => "WARNING:",
        MessageKind::Error => "ERROR:",
    };
    if PLAIN_OUTPUT.load(Ordering::Relaxed) {
        return label.to_string();
    }
    match kind {
        MessageKind::Info => label.to_string(),
        MessageKind::Success => label.bright_green().to_string(),
        MessageKind::Warning => label.bright_yellow().to_string(),
        MessageKind::Error => label.bright_red().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    println!("{} {}", styled_label(kind), message);
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

/// Renders an amount with two decimals and an explicit sign.
pub fn format_signed(amount: f64) -> String {
    format!("{:+.2}", amount)
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount(749.75), "749.75");
        assert_eq!(format_amount(1500.0), "1500.00");
        assert_eq!(format_signed(-500.0), "-500.00");
        assert_eq!(format_signed(1000.5), "+1000.50");
    }
}
