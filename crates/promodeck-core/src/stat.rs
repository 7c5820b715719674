//! Statistic label format descriptors
//!
//! A stat label like `"55%"`, `"+25%"` or `"4x"` is parsed exactly once
//! into a `StatFormat`; every later animation frame renders through the
//! descriptor instead of re-sniffing the text.

use std::sync::OnceLock;

use regex::Regex;

fn non_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\D").expect("valid regex"))
}

/// How a statistic value is rendered while its counter runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatFormat {
    /// Opaque text written through unchanged, never animated.
    /// Covers the hardwired `"24/7"` case and labels without digits.
    Literal(String),
    /// `"{n}x"`
    Multiplier(u32),
    /// `"+{n}%"`
    PlusPercent(u32),
    /// `"{n}%"`
    Percent(u32),
    /// Bare integer
    Count(u32),
}

impl StatFormat {
    /// Resolve a display label into a format descriptor.
    ///
    /// Precedence: the `"24/7"` literal, then `x`, then `+`, then `%` or a
    /// target of 10 and above, then a bare count. Labels with no digits are
    /// literals and are left alone.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();

        // "24/7" is deliberately a literal match, not a general rule
        if label == "24/7" {
            return Self::Literal(label.to_string());
        }

        let digits = non_digits().replace_all(label, "");
        let Ok(target) = digits.parse::<u32>() else {
            return Self::Literal(label.to_string());
        };

        if label.contains('x') {
            Self::Multiplier(target)
        } else if label.contains('+') {
            Self::PlusPercent(target)
        } else if label.contains('%') || target >= 10 {
            Self::Percent(target)
        } else {
            Self::Count(target)
        }
    }

    /// The value the counter climbs to; zero for literals
    pub fn target(&self) -> u32 {
        match self {
            Self::Literal(_) => 0,
            Self::Multiplier(t) | Self::PlusPercent(t) | Self::Percent(t) | Self::Count(t) => *t,
        }
    }

    /// Whether a count-up animation applies at all
    pub fn is_animated(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    /// Render an intermediate counter value in this format
    pub fn render(&self, value: u32) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Multiplier(_) => format!("{value}x"),
            Self::PlusPercent(_) => format!("+{value}%"),
            Self::Percent(_) => format!("{value}%"),
            Self::Count(_) => value.to_string(),
        }
    }

    /// The final rendered text once the counter has finished
    pub fn final_display(&self) -> String {
        self.render(self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        let format = StatFormat::parse("55%");
        assert_eq!(format, StatFormat::Percent(55));
        assert_eq!(format.render(12), "12%");
        assert_eq!(format.final_display(), "55%");
    }

    #[test]
    fn test_plus_percent_label() {
        let format = StatFormat::parse("+25%");
        assert_eq!(format, StatFormat::PlusPercent(25));
        assert_eq!(format.final_display(), "+25%");
    }

    #[test]
    fn test_multiplier_label() {
        let format = StatFormat::parse("4x");
        assert_eq!(format, StatFormat::Multiplier(4));
        assert_eq!(format.render(0), "0x");
        assert_eq!(format.final_display(), "4x");
    }

    #[test]
    fn test_around_the_clock_literal() {
        let format = StatFormat::parse("24/7");
        assert_eq!(format, StatFormat::Literal("24/7".to_string()));
        assert!(!format.is_animated());
        assert_eq!(format.render(123), "24/7");
        assert_eq!(format.final_display(), "24/7");
    }

    #[test]
    fn test_bare_count_below_ten() {
        let format = StatFormat::parse("7");
        assert_eq!(format, StatFormat::Count(7));
        assert_eq!(format.final_display(), "7");
    }

    #[test]
    fn test_suffixless_large_number_becomes_percent() {
        // 10 and above implies percent even without a suffix
        assert_eq!(StatFormat::parse("40"), StatFormat::Percent(40));
    }

    #[test]
    fn test_non_numeric_label_is_literal() {
        let format = StatFormat::parse("Fast");
        assert_eq!(format, StatFormat::Literal("Fast".to_string()));
        assert!(!format.is_animated());
    }

    #[test]
    fn test_multiplier_takes_precedence_over_percent() {
        assert_eq!(StatFormat::parse("4x%"), StatFormat::Multiplier(4));
    }

    #[test]
    fn test_digits_are_concatenated() {
        // Non-digit stripping concatenates separate digit runs
        assert_eq!(StatFormat::parse("1a2%"), StatFormat::Percent(12));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(StatFormat::parse("  55%  "), StatFormat::Percent(55));
        assert_eq!(
            StatFormat::parse(" 24/7 "),
            StatFormat::Literal("24/7".to_string())
        );
    }
}
