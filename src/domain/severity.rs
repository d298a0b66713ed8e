//! Status keyword to colour/symbol mapping.

/// Severity derived from a status page indicator keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Operational,
    Minor,
    Major,
    Critical,
    /// Unrecognized keyword or no indicator at all.
    Other,
}

impl Severity {
    /// Map an indicator keyword. Unrecognized keywords fall back to `Other`.
    #[must_use]
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some("none") => Self::Operational,
            Some("minor") => Self::Minor,
            Some("major") => Self::Major,
            Some("critical") => Self::Critical,
            _ => Self::Other,
        }
    }

    /// RGB colour.
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Operational => 0x2E_CC71,
            Self::Minor => 0xF1_C40F,
            Self::Major => 0xE6_7E22,
            Self::Critical => 0xE7_4C3C,
            Self::Other => 0x34_98DB,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Operational => "✅",
            Self::Minor => "⚠️",
            Self::Major => "🔴",
            Self::Critical => "🚨",
            Self::Other => "🎮",
        }
    }

    /// Coloured marker for chat clients without embed colours.
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        match self {
            Self::Operational => "🟢",
            Self::Minor => "🟡",
            Self::Major => "🟠",
            Self::Critical => "🔴",
            Self::Other => "🔵",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords_map() {
        assert_eq!(Severity::from_indicator(Some("none")), Severity::Operational);
        assert_eq!(Severity::from_indicator(Some("minor")), Severity::Minor);
        assert_eq!(Severity::from_indicator(Some("major")), Severity::Major);
        assert_eq!(Severity::from_indicator(Some("critical")), Severity::Critical);
    }

    #[test]
    fn unknown_keywords_fall_back() {
        assert_eq!(Severity::from_indicator(Some("maintenance")), Severity::Other);
        assert_eq!(Severity::from_indicator(None), Severity::Other);
        assert_eq!(Severity::Other.symbol(), "🎮");
        assert_eq!(Severity::Other.color(), 0x3498DB);
    }

    #[test]
    fn critical_is_red() {
        assert_eq!(Severity::Critical.color(), 0xE74C3C);
        assert_eq!(Severity::Critical.symbol(), "🚨");
    }
}
