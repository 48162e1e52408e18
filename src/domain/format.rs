//! Display helpers for the literal statistics tables.

use serde::{Deserialize, Serialize};

/// Direction of a headline change, drives arrow glyph and colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Stable => "trend-stable",
        }
    }
}

/// Trend implied by a signed change; exact zero is stable.
pub fn trend_of(change: f64) -> Trend {
    if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Width of a share bar in percent of its track, clamped to `[0, 100]`.
pub fn share_width(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// `5.8` -> `"+5.8%"`, `-0.5` -> `"-0.5%"`, `0.0` -> `"0.0%"`.
pub fn signed_pct(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else if value < 0.0 {
        format!("{:.1}%", value)
    } else {
        "0.0%".to_string()
    }
}

/// Integer with comma thousands separators.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Headcount in millions as shown on employment cards, e.g. `16.7M`.
pub fn millions(value: f64) -> String {
    format!("{:.1}M", value)
}

/// Ringgit amount in billions, e.g. `RM 142.3B`.
pub fn ringgit_billions(value: f64) -> String {
    format!("RM {:.1}B", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_width_clamps_and_guards() {
        assert_eq!(share_width(50.0, 100.0), 50.0);
        assert_eq!(share_width(150.0, 100.0), 100.0);
        assert_eq!(share_width(-3.0, 100.0), 0.0);
        assert_eq!(share_width(10.0, 0.0), 0.0);
        assert_eq!(share_width(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn signed_percentages() {
        assert_eq!(signed_pct(5.8), "+5.8%");
        assert_eq!(signed_pct(-0.5), "-0.5%");
        assert_eq!(signed_pct(0.0), "0.0%");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1247), "1,247");
        assert_eq!(thousands(2_100_000), "2,100,000");
    }

    #[test]
    fn trend_from_sign() {
        assert_eq!(trend_of(0.4), Trend::Up);
        assert_eq!(trend_of(-0.1), Trend::Down);
        assert_eq!(trend_of(0.0), Trend::Stable);
    }
}
