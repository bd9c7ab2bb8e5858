//! Macro Extractor — estimates calories and protein from free-text meal plans.
//!
//! Purely lexical: every `N calories` and `N g protein` outside an aggregate line
//! is summed. Numbers are not tied to a meal, duplicates are not removed, and
//! other spellings ("180cal", "180 Cal", "5 grams protein") are ignored.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_CALORIES: u64 = 1800;
pub const DEFAULT_TARGET_PROTEIN: u64 = 130;

/// Lines containing any of these are summary lines and would double count.
const AGGREGATE_MARKERS: [&str; 2] = ["Total:", "Overall daily total"];

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

// `\d` is any Unicode decimal digit. The separators \x1C-\x1F count as whitespace too.
static CALORIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[\s\x1C-\x1F]*calories").expect("calorie pattern is valid")
});

static PROTEIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[\s\x1C-\x1F]*g protein").expect("protein pattern is valid")
});

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\d\z").expect("digit pattern is valid"));

/// Summed figures. A value of `u64::MAX` means the sum overflowed, not a real total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u64,
    pub protein_grams: u64,
}

/// Daily reference values the extracted totals are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: u64,
    pub protein_grams: u64,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: DEFAULT_TARGET_CALORIES,
            protein_grams: DEFAULT_TARGET_PROTEIN,
        }
    }
}

/// One progress bar: total vs target, with the fill fraction clamped to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    pub total: u64,
    pub target: u64,
    pub fraction: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSummary {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
}

impl MacroTargets {
    pub fn summarize(&self, totals: MacroTotals) -> MacroSummary {
        MacroSummary {
            calories: MacroProgress {
                total: totals.calories,
                target: self.calories,
                fraction: progress_fraction(totals.calories, self.calories),
                label: format!("Total Calories: {} / {}", totals.calories, self.calories),
            },
            protein: MacroProgress {
                total: totals.protein_grams,
                target: self.protein_grams,
                fraction: progress_fraction(totals.protein_grams, self.protein_grams),
                label: format!(
                    "Total Protein: {}g / {}g",
                    totals.protein_grams, self.protein_grams
                ),
            },
        }
    }
}

/// `min(total / target, 1.0)`. A zero target counts as already met.
pub fn progress_fraction(total: u64, target: u64) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (total as f64 / target as f64).min(1.0)
}

/// Sums calorie and protein figures in `text`, skipping aggregate lines.
///
/// Text without any matching figure yields zero totals; that is not an error.
pub fn extract_macros(text: &str) -> MacroTotals {
    let filtered = LINE_BREAK
        .split(text)
        .filter(|line| !is_aggregate_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    MacroTotals {
        calories: sum_matches(&CALORIES, &filtered),
        protein_grams: sum_matches(&PROTEIN, &filtered),
    }
}

fn is_aggregate_line(line: &str) -> bool {
    AGGREGATE_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Sums capture group 1 of every non-overlapping match. Saturates instead of wrapping.
fn sum_matches(pattern: &Regex, text: &str) -> u64 {
    pattern
        .captures_iter(text)
        .map(|caps| decimal_value(&caps[1]))
        .fold(0u64, u64::saturating_add)
}

/// Value of a run of decimal digits from any script. Saturates at `u64::MAX`.
fn decimal_value(digits: &str) -> u64 {
    digits
        .chars()
        .try_fold(0u64, |acc, c| acc.checked_mul(10)?.checked_add(digit_value(c)))
        .unwrap_or(u64::MAX)
}

/// Unicode lays out every script's decimal digits as contiguous 0-9 runs, and each
/// maximal block of adjacent digit code points starts at a zero. Counting the
/// digit code points before `c` in its block gives its value.
fn digit_value(c: char) -> u64 {
    if let Some(d) = c.to_digit(10) {
        return u64::from(d);
    }
    let mut preceding = 0u32;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        preceding += 1;
        cp -= 1;
    }
    u64::from(preceding % 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
