use colored::Colorize;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::{OnceLock, RwLock};

const RULE_WIDTH: usize = 62;

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// ASCII rules and no colour.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
    if prefs.plain_mode {
        colored::control::set_override(false);
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn rule_char(prefs: &OutputPreferences) -> char {
    if prefs.plain_mode {
        '-'
    } else {
        '─'
    }
}

/// A full-width rule with the title centred in it.
pub fn section(title: impl fmt::Display) -> String {
    let prefs = current_preferences();
    let title = format!(" {} ", title.to_string().trim());
    let fill = RULE_WIDTH.saturating_sub(title.chars().count());
    let ch = rule_char(&prefs).to_string();
    let line = format!("{}{}{}", ch.repeat(fill / 2), title, ch.repeat(fill - fill / 2));
    line.bold().to_string()
}

pub fn separator() -> String {
    rule_char(&current_preferences()).to_string().repeat(RULE_WIDTH)
}

/// Left column padded so values line up.
pub fn label_value(label: &str, value: impl fmt::Display) -> String {
    format!("{:<18}{}", format!("{label}:"), value)
}

pub fn money(amount: Decimal) -> String {
    format!("$ {:.2}", amount.round_dp(2))
}

/// Money coloured by sign: green when something is left, red when overspent.
pub fn balance(amount: Decimal) -> String {
    let text = money(amount);
    if amount.is_sign_negative() && !amount.is_zero() {
        text.bright_red().to_string()
    } else {
        text.bright_green().to_string()
    }
}
