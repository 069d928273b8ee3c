//! Display formatting for goal and progress values.
//!
//! Formatting is presentation only. Nothing in the state machine ever compares
//! formatted strings; all math runs on the raw `f64` values.

use crate::i18n::Locale;
use crate::model::GoalType;

/// Turns a raw amount into display text.
pub trait ValueFormatter {
    fn format(&self, value: f64, goal_type: GoalType, locale: Locale) -> String;
}

/// Default formatter following each locale's number conventions.
///
/// Currency always shows two fraction digits. English separates thousands
/// with `,` and uses `.` for decimals. Spanish swaps the two and leaves
/// four-digit integers ungrouped (`1234,50` but `12.345,00`). Elements are
/// printed as plain numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleFormatter;

struct NumberSymbols {
    group: char,
    decimal: char,
    /// Shortest integer part that gets a group separator.
    min_grouped_digits: usize,
}

fn symbols(locale: Locale) -> NumberSymbols {
    match locale {
        Locale::En => NumberSymbols {
            group: ',',
            decimal: '.',
            min_grouped_digits: 4,
        },
        Locale::Es => NumberSymbols {
            group: '.',
            decimal: ',',
            min_grouped_digits: 5,
        },
    }
}

fn group_digits(digits: &str, separator: char, min_grouped_digits: usize) -> String {
    if digits.len() < min_grouped_digits {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn format_currency(value: f64, locale: Locale) -> String {
    let symbols = symbols(locale);
    let fixed = format!("{:.2}", value.abs());
    let (digits, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    let whole = group_digits(digits, symbols.group, symbols.min_grouped_digits);
    format!("{sign}{whole}{}{cents}", symbols.decimal)
}

impl ValueFormatter for LocaleFormatter {
    fn format(&self, value: f64, goal_type: GoalType, locale: Locale) -> String {
        match goal_type {
            GoalType::Currency => format_currency(value, locale),
            GoalType::Elements => value.to_string(),
        }
    }
}

/// The `current / goal` caption shown over the progress bar.
pub fn progress_label(
    formatter: &dyn ValueFormatter,
    current: f64,
    goal: f64,
    goal_type: GoalType,
    locale: Locale,
) -> String {
    let current = formatter.format(current, goal_type, locale);
    let goal = formatter.format(goal, goal_type, locale);
    match goal_type {
        GoalType::Currency => format!("${current} / ${goal}"),
        GoalType::Elements => format!("{current} / {goal}"),
    }
}
