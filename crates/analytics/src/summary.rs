//! Scalar statistics over a listing collection.
//!
//! Every statistic falls back to zero when no listing qualifies. Zero
//! therefore means "insufficient data" here, never a real amount.

use data_loader::{Listing, Modality, Salary};
use serde::Serialize;

/// Salary bounds and mean over listings that publish a minimum salary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SalaryStats {
    /// Mean minimum salary, rounded to the nearest whole unit
    pub average: Salary,
    pub min: Salary,
    pub max: Salary,
    /// How many listings contributed
    pub sample_size: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScalarSummary {
    pub listing_count: usize,
    pub salary: SalaryStats,
    /// Mean required years of experience, one decimal place
    pub average_experience: f64,
}

/// Listing counts per modality plus the salary and verification tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModalityBreakdown {
    pub total: usize,
    pub remote: usize,
    pub hybrid: usize,
    pub on_site: usize,
    pub with_salary: usize,
    pub verified: usize,
}

pub fn summarize<'a, I>(listings: I) -> ScalarSummary
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut listing_count = 0usize;
    let mut experience_total = 0u64;
    let mut salary_total = 0u128;
    let mut salary = SalaryStats::default();

    for listing in listings {
        listing_count += 1;
        experience_total += u64::from(listing.requirements.experience_years);

        if let Some(amount) = listing.published_salary_min() {
            if salary.sample_size == 0 {
                salary.min = amount;
                salary.max = amount;
            } else {
                salary.min = salary.min.min(amount);
                salary.max = salary.max.max(amount);
            }
            salary.sample_size += 1;
            salary_total += u128::from(amount);
        }
    }

    if salary.sample_size > 0 {
        salary.average = (salary_total as f64 / salary.sample_size as f64).round() as Salary;
    }

    let average_experience = if listing_count > 0 {
        round_to_tenth(experience_total as f64 / listing_count as f64)
    } else {
        0.0
    };

    ScalarSummary {
        listing_count,
        salary,
        average_experience,
    }
}

pub fn modality_breakdown<'a, I>(listings: I) -> ModalityBreakdown
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut breakdown = ModalityBreakdown::default();

    for listing in listings {
        breakdown.total += 1;
        match listing.position.modality {
            Some(Modality::Remote) => breakdown.remote += 1,
            Some(Modality::Hybrid) => breakdown.hybrid += 1,
            Some(Modality::OnSite) => breakdown.on_site += 1,
            None => {}
        }
        if listing.published_salary_min().is_some() {
            breakdown.with_salary += 1;
        }
        if listing.employer.verified {
            breakdown.verified += 1;
        }
    }

    breakdown
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    fn with_salary(id: &str, salary_min: Option<Salary>, experience: u32) -> Listing {
        let mut listing = listing(id);
        listing.compensation.salary_min = salary_min;
        listing.compensation.salary_max = None;
        listing.requirements.experience_years = experience;
        listing
    }

    #[test]
    fn test_salary_stats_over_published_salaries() {
        let listings = vec![
            with_salary("1", Some(3_000_000), 1),
            with_salary("2", None, 2),
            with_salary("3", Some(4_500_001), 4),
            with_salary("4", Some(2_000_000), 0),
        ];

        let summary = summarize(&listings);

        assert_eq!(summary.listing_count, 4);
        assert_eq!(summary.salary.sample_size, 3);
        assert_eq!(summary.salary.min, 2_000_000);
        assert_eq!(summary.salary.max, 4_500_001);
        // 9_500_001 / 3 = 3_166_667.0 (rounded)
        assert_eq!(summary.salary.average, 3_166_667);
        assert_eq!(summary.average_experience, 1.8);
    }

    #[test]
    fn test_no_salaries_yields_zero_sentinel() {
        let listings = vec![with_salary("1", None, 3), with_salary("2", Some(0), 5)];

        let summary = summarize(&listings);

        assert_eq!(summary.salary, SalaryStats::default());
        assert_eq!(summary.salary.average, 0);
        assert_eq!(summary.salary.min, 0);
        assert_eq!(summary.salary.max, 0);
        assert_eq!(summary.average_experience, 4.0);
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let summary = summarize(&Vec::<Listing>::new());
        assert_eq!(summary, ScalarSummary::default());
    }

    #[test]
    fn test_experience_rounds_to_one_decimal() {
        let listings = vec![
            with_salary("1", None, 1),
            with_salary("2", None, 1),
            with_salary("3", None, 2),
        ];
        // 4 / 3 = 1.333...
        assert_eq!(summarize(&listings).average_experience, 1.3);
    }

    #[test]
    fn test_modality_breakdown() {
        let mut remote = listing("2");
        remote.position.modality = Some(Modality::Remote);
        remote.employer.verified = true;
        let mut hybrid = listing("3");
        hybrid.position.modality = Some(Modality::Hybrid);
        hybrid.compensation.salary_min = None;
        let mut unknown = listing("4");
        unknown.position.modality = None;

        let listings = vec![listing("1"), remote, hybrid, unknown];
        let breakdown = modality_breakdown(&listings);

        assert_eq!(
            breakdown,
            ModalityBreakdown {
                total: 4,
                remote: 1,
                hybrid: 1,
                on_site: 1,
                with_salary: 3,
                verified: 1,
            }
        );
    }
}
