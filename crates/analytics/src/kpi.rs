//! Headline indicators for the overview page.

use crate::counts::{category_counts, CategoryField};
use crate::skills::skill_frequency;
use data_loader::{Listing, Modality, Salary};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_listings: usize,
    /// Upper median of published minimum salaries; zero when none are published
    pub median_salary: Salary,
    /// Distinct employer names
    pub hiring_companies: usize,
    pub remote_listings: usize,
    pub top_skill: Option<String>,
    pub leading_sector: Option<String>,
}

impl Kpis {
    /// Share of remote listings as a whole percentage
    pub fn remote_share(&self) -> u32 {
        if self.total_listings == 0 {
            return 0;
        }
        (self.remote_listings as f64 * 100.0 / self.total_listings as f64).round() as u32
    }
}

pub fn compute_kpis<'a, I>(listings: I) -> Kpis
where
    I: IntoIterator<Item = &'a Listing>,
{
    let listings: Vec<&Listing> = listings.into_iter().collect();

    let mut salaries: Vec<Salary> = listings
        .iter()
        .filter_map(|listing| listing.published_salary_min())
        .collect();
    salaries.sort_unstable();
    let median_salary = salaries.get(salaries.len() / 2).copied().unwrap_or(0);

    let hiring_companies = listings
        .iter()
        .map(|listing| listing.employer.name.as_str())
        .collect::<HashSet<_>>()
        .len();

    let remote_listings = listings
        .iter()
        .filter(|listing| listing.position.modality == Some(Modality::Remote))
        .count();

    let top_skill = skill_frequency(listings.iter().copied(), 1)
        .into_iter()
        .next()
        .map(|entry| entry.skill);

    let leading_sector = category_counts(listings.iter().copied(), CategoryField::Sector)
        .into_iter()
        .next()
        .map(|entry| entry.label);

    Kpis {
        total_listings: listings.len(),
        median_salary,
        hiring_companies,
        remote_listings,
        top_skill,
        leading_sector,
    }
}
