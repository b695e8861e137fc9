//! Age-bracket filter shared by every fetch and KPI title.

/// Age bracket selected in the filter bar. `Geral` spans 15-29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeGroup {
    #[default]
    Geral,
    From15To19,
    From20To24,
    From25To29,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Geral,
        AgeGroup::From15To19,
        AgeGroup::From20To24,
        AgeGroup::From25To29,
    ];

    /// Value of the `age_group` query parameter and of the select options.
    pub fn as_param(self) -> &'static str {
        match self {
            AgeGroup::Geral => "geral",
            AgeGroup::From15To19 => "15-19",
            AgeGroup::From20To24 => "20-24",
            AgeGroup::From25To29 => "25-29",
        }
    }

    pub fn from_param(value: &str) -> Option<AgeGroup> {
        AgeGroup::ALL.into_iter().find(|g| g.as_param() == value)
    }

    /// Qualifier appended to age-dependent KPI titles.
    pub fn kpi_qualifier(self) -> &'static str {
        match self {
            AgeGroup::Geral => "(15-29 anos)",
            AgeGroup::From15To19 => "(15-19 anos)",
            AgeGroup::From20To24 => "(20-24 anos)",
            AgeGroup::From25To29 => "(25-29 anos)",
        }
    }

    /// Label shown in the age filter dropdown.
    pub fn display_label(self) -> &'static str {
        match self {
            AgeGroup::Geral => "Geral (15-29 anos)",
            AgeGroup::From15To19 => "15 a 19 anos",
            AgeGroup::From20To24 => "20 a 24 anos",
            AgeGroup::From25To29 => "25 a 29 anos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AgeGroup;

    #[test]
    fn test_param_round_trip() {
        for g in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_param(g.as_param()), Some(g));
        }
        assert_eq!(AgeGroup::from_param("30-34"), None);
    }

    #[test]
    fn test_default_is_geral() {
        assert_eq!(AgeGroup::default(), AgeGroup::Geral);
        assert_eq!(AgeGroup::Geral.kpi_qualifier(), "(15-29 anos)");
    }
}
