//! Bundles of aggregates computed together for one view.

use crate::counts::{category_counts, CategoryCount, CategoryField};
use crate::kpi::{compute_kpis, Kpis};
use crate::skills::{skill_frequency, SkillCount};
use crate::summary::{modality_breakdown, summarize, ModalityBreakdown, ScalarSummary};
use data_loader::Listing;
use serde::Serialize;
use tracing::debug;

/// Skills shown on the overview
pub const OVERVIEW_TOP_SKILLS: usize = 10;

/// Skills shown on the analysis view
pub const ANALYSIS_TOP_SKILLS: usize = 8;

/// Headline numbers plus the location, modality and level charts
#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub kpis: Kpis,
    pub breakdown: ModalityBreakdown,
    pub locations: Vec<CategoryCount>,
    pub modalities: Vec<CategoryCount>,
    pub levels: Vec<CategoryCount>,
    pub top_skills: Vec<SkillCount>,
}

impl OverviewReport {
    pub fn build(listings: &[&Listing]) -> Self {
        debug!(listings = listings.len(), "building overview report");
        let view = || listings.iter().copied();

        Self {
            kpis: compute_kpis(view()),
            breakdown: modality_breakdown(view()),
            locations: category_counts(view(), CategoryField::Location),
            modalities: category_counts(view(), CategoryField::Modality),
            levels: category_counts(view(), CategoryField::Level),
            top_skills: skill_frequency(view(), OVERVIEW_TOP_SKILLS),
        }
    }
}

/// Sector, modality and level charts with the scalar summary
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: ScalarSummary,
    pub breakdown: ModalityBreakdown,
    pub sectors: Vec<CategoryCount>,
    pub modalities: Vec<CategoryCount>,
    pub levels: Vec<CategoryCount>,
    pub top_skills: Vec<SkillCount>,
}

impl AnalysisReport {
    pub fn build(listings: &[&Listing]) -> Self {
        debug!(listings = listings.len(), "building analysis report");
        let view = || listings.iter().copied();

        Self {
            summary: summarize(view()),
            breakdown: modality_breakdown(view()),
            sectors: category_counts(view(), CategoryField::Sector),
            modalities: category_counts(view(), CategoryField::Modality),
            levels: category_counts(view(), CategoryField::Level),
            top_skills: skill_frequency(view(), ANALYSIS_TOP_SKILLS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_analysis_report_limits_skills() {
        let mut many = listing("1");
        many.requirements.technical_skills = (0..12).map(|i| format!("skill-{i}")).collect();
        let listings = vec![many, listing("2")];
        let view: Vec<&Listing> = listings.iter().collect();

        let report = AnalysisReport::build(&view);

        assert_eq!(report.top_skills.len(), ANALYSIS_TOP_SKILLS);
        assert_eq!(report.summary.listing_count, 2);
        assert_eq!(report.sectors[0].count, 2);
    }

    #[test]
    fn test_overview_report_on_empty_view() {
        let report = OverviewReport::build(&[]);

        assert_eq!(report.kpis.total_listings, 0);
        assert!(report.locations.is_empty());
        assert!(report.top_skills.is_empty());
    }
}
