//! Pure display formatting for HUD slots.
//!
//! Every function is total: out-of-domain input (missing, NaN, infinite)
//! falls back to [`PLACEHOLDER`] instead of erroring, so one bad field never
//! fails a render pass.

use serde::{Deserialize, Serialize};

use crate::domain::Headline;

/// Neutral placeholder shown in any slot whose value is unavailable.
pub const PLACEHOLDER: &str = "—";

/// Confidence bar fill, in pixels per confidence percent.
pub const BAR_PX_PER_PERCENT: f64 = 0.8;

/// Sign category used to colour numeric slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Classify a value by sign; missing or non-finite values are neutral.
    pub fn of(n: Option<f64>) -> Self {
        match n {
            Some(v) if v > 0.0 => Self::Positive,
            Some(v) if v < 0.0 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Positive => "pos",
            Self::Negative => "neg",
            Self::Neutral => "neu",
        }
    }
}

fn finite(n: Option<f64>) -> Option<f64> {
    n.filter(|v| v.is_finite())
}

/// Fraction as a signed percentage delta: `0.012` -> `"+1.20%"`.
pub fn signed_pct(fraction: Option<f64>) -> String {
    match finite(fraction) {
        Some(f) => {
            let pct = f * 100.0;
            let sign = if pct >= 0.0 { "+" } else { "" };
            format!("{sign}{pct:.2}%")
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Short-term return slot text: `("1m", 0.012)` -> `"1m +1.20%"`.
pub fn ret_window(label: &str, fraction: Option<f64>) -> String {
    match finite(fraction) {
        Some(_) => format!("{label} {}", signed_pct(fraction)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Signed two-decimal number for the sentiment mean: `0.31` -> `"+0.31"`.
pub fn signed_num(n: Option<f64>) -> String {
    match finite(n) {
        Some(v) => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}")
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Sentiment dispersion: `0.12` -> `"σ0.12"`.
pub fn sigma(n: Option<f64>) -> String {
    match finite(n) {
        Some(v) => format!("σ{v:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Price with two decimals: `189.5` -> `"189.50"`.
pub fn price(n: Option<f64>) -> String {
    match finite(n) {
        Some(v) => format!("{v:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Bid/ask pair with per-side fallback: `"189.40/189.60"`.
pub fn bid_ask(bid: Option<f64>, ask: Option<f64>) -> String {
    if finite(bid).is_none() && finite(ask).is_none() {
        return PLACEHOLDER.to_string();
    }
    format!("{}/{}", price(bid), price(ask))
}

/// Arrow for position relative to the 20-period moving average.
pub fn sma_arrow(above: Option<bool>) -> (&'static str, Tone) {
    match above {
        Some(true) => ("↑", Tone::Positive),
        Some(false) => ("↓", Tone::Negative),
        None => (PLACEHOLDER, Tone::Neutral),
    }
}

/// Confidence fraction converted to a whole percent, unclamped: the label
/// reports whatever the gateway said, only the bar fill is clamped.
pub fn confidence_percent(fraction: Option<f64>) -> Option<i64> {
    finite(fraction).map(|f| (f * 100.0).round() as i64)
}

/// Bar fill width in pixels, clamped to the 0-100 percent range.
pub fn bar_width(percent: i64) -> f64 {
    percent.clamp(0, 100) as f64 * BAR_PX_PER_PERCENT
}

/// Cache age: `12` -> `"⟳12s"`.
pub fn cache_age(seconds: Option<i64>) -> String {
    match seconds {
        Some(s) if s >= 0 => format!("⟳{s}s"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Clean the one-liner for display.
///
/// Strips a leading `"<CLASS>: "` token matching the recommendation code
/// (case-insensitive) and a trailing `"Conf <0-100>%"` annotation, collapses
/// redundant whitespace, and capitalizes the first alphabetic character:
/// `("IC: Range day. Conf 76%.", Some("IC"))` -> `"Range day."`.
pub fn summary_text(one_liner: &str, class_code: Option<&str>) -> String {
    let mut rest = one_liner.trim();

    if let Some(code) = class_code.map(str::trim).filter(|c| !c.is_empty()) {
        let n = code.len();
        if rest.len() > n
            && rest.is_char_boundary(n)
            && rest[..n].eq_ignore_ascii_case(code)
            && rest[n..].starts_with(':')
        {
            rest = rest[n + 1..].trim_start();
        }
    }

    rest = strip_conf_suffix(rest);

    let collapsed = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize_first(&collapsed)
}

/// Headline line shown on the ribbon: cleaned summary plus, when present,
/// `"<title> • <publisher>"`. This composed line is what the label fitter
/// cuts down to the available width.
pub fn headline_line(summary: &str, headline: Option<&Headline>) -> String {
    let Some(headline) = headline else {
        return summary.to_string();
    };

    let title = headline.title.trim();
    if title.is_empty() {
        return summary.to_string();
    }

    let mut line = String::from(summary);
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(title);

    let publisher = headline.publisher.trim();
    if !publisher.is_empty() {
        line.push_str(" • ");
        line.push_str(publisher);
    }
    line
}

/// Drop a trailing `"Conf <0-100>%"` annotation, with an optional final
/// period, from the summary text.
fn strip_conf_suffix(text: &str) -> &str {
    let trimmed = text.trim_end();
    let bytes = trimmed.as_bytes();
    let mut end = trimmed.len();

    if end > 0 && bytes[end - 1] == b'.' {
        end -= 1;
    }
    if end == 0 || bytes[end - 1] != b'%' {
        return trimmed;
    }
    end -= 1;

    let digits_end = end;
    while end > 0 && bytes[end - 1].is_ascii_digit() {
        end -= 1;
    }
    if end == digits_end {
        return trimmed;
    }
    let value: u32 = match trimmed[end..digits_end].parse() {
        Ok(v) => v,
        Err(_) => return trimmed,
    };
    if value > 100 {
        return trimmed;
    }

    let head = trimmed[..end].trim_end();
    if head.to_ascii_lowercase().ends_with("conf") {
        return head[..head.len() - 4].trim_end();
    }
    trimmed
}

fn capitalize_first(text: &str) -> String {
    let Some(pos) = text.find(|c: char| c.is_alphabetic()) else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..pos]);
    let mut chars = text[pos..].chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}
