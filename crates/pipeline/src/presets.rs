//! Named bundles of criteria changes.

use crate::criteria::CriteriaPatch;
use data_loader::{Modality, SeniorityLevel};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Entry-level positions, one year of experience at most
    FirstJob,
    /// Senior and management roles in the technology sector
    TechSenior,
    /// Remote positions only
    Remote,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown preset: {0} (expected primer-empleo, tech-senior or remoto)")]
pub struct UnknownPreset(pub String);

impl Preset {
    pub fn all() -> [Preset; 3] {
        [Preset::FirstJob, Preset::TechSenior, Preset::Remote]
    }

    /// Stable identifier used on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Preset::FirstJob => "primer-empleo",
            Preset::TechSenior => "tech-senior",
            Preset::Remote => "remoto",
        }
    }

    pub fn patch(self) -> CriteriaPatch {
        match self {
            Preset::FirstJob => CriteriaPatch {
                max_experience: Some(1),
                levels: Some(vec![SeniorityLevel::Junior, SeniorityLevel::Assistant]),
                salary_only: Some(false),
                ..CriteriaPatch::default()
            },
            Preset::TechSenior => CriteriaPatch {
                sectors: Some(vec!["Tecnología".to_string()]),
                levels: Some(vec![
                    SeniorityLevel::Senior,
                    SeniorityLevel::Manager,
                    SeniorityLevel::Director,
                ]),
                max_experience: Some(5),
                ..CriteriaPatch::default()
            },
            Preset::Remote => CriteriaPatch {
                modalities: Some(vec![Modality::Remote]),
                ..CriteriaPatch::default()
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::all()
            .into_iter()
            .find(|preset| preset.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::{CriteriaUpdate, FilterCriteria};

    #[test]
    fn test_first_job_preset() {
        let criteria = FilterCriteria {
            query: "soporte".to_string(),
            salary_only: true,
            ..FilterCriteria::default()
        }
        .apply(CriteriaUpdate::ApplyPreset(Preset::FirstJob));

        assert_eq!(criteria.max_experience, Some(1));
        assert_eq!(
            criteria.levels,
            vec![SeniorityLevel::Junior, SeniorityLevel::Assistant]
        );
        assert!(!criteria.salary_only);
        assert_eq!(criteria.query, "soporte");
    }

    #[test]
    fn test_tech_senior_preset() {
        let criteria = FilterCriteria::default().apply(CriteriaUpdate::ApplyPreset(Preset::TechSenior));

        assert_eq!(criteria.sectors, vec!["Tecnología".to_string()]);
        assert_eq!(criteria.max_experience, Some(5));
        assert_eq!(criteria.levels.len(), 3);
        assert!(criteria.modalities.is_empty());
    }

    #[test]
    fn test_remote_preset_only_touches_modalities() {
        let before = FilterCriteria {
            locations: vec!["Itagüí".to_string()],
            max_experience: Some(3),
            ..FilterCriteria::default()
        };
        let after = before.apply(CriteriaUpdate::ApplyPreset(Preset::Remote));

        assert_eq!(after.modalities, vec![Modality::Remote]);
        assert_eq!(after.locations, before.locations);
        assert_eq!(after.max_experience, Some(3));
    }

    #[test]
    fn test_parse_slug() {
        assert_eq!("remoto".parse::<Preset>(), Ok(Preset::Remote));
        assert_eq!(" Tech-Senior ".parse::<Preset>(), Ok(Preset::TechSenior));
        assert!("junior".parse::<Preset>().is_err());
        assert_eq!(Preset::FirstJob.to_string(), "primer-empleo");
    }
}
