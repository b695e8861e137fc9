//! Calendar-driven visibility of the seasonal highlight banner.
//!
//! The banner is driven by a configured set of active months rather than a
//! hardcoded calendar check, so campaigns can cover more than one month.

use chrono::{Datelike, Local};

/// Months (1-12) in which the seasonal highlight card is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonalConfig {
    pub active_months: Vec<u32>,
}

impl Default for SeasonalConfig {
    /// June only, the campaign month the panel launched with.
    fn default() -> Self {
        SeasonalConfig { active_months: vec![6] }
    }
}

impl SeasonalConfig {
    pub fn is_active(&self, month: u32) -> bool {
        self.active_months.contains(&month)
    }

    /// Check against the browser's local clock.
    pub fn is_active_now(&self) -> bool {
        self.is_active(Local::now().month())
    }
}

#[cfg(test)]
mod tests {
    use super::SeasonalConfig;

    #[test]
    fn test_default_is_june_only() {
        let config = SeasonalConfig::default();
        assert!(config.is_active(6));
        for month in [1, 2, 3, 4, 5, 7, 8, 9, 10, 11, 12] {
            assert!(!config.is_active(month));
        }
    }

    #[test]
    fn test_multiple_active_months() {
        let config = SeasonalConfig { active_months: vec![6, 7] };
        assert!(config.is_active(6));
        assert!(config.is_active(7));
        assert!(!config.is_active(8));
    }
}
