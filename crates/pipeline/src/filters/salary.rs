//! Salary filters.

use crate::criteria::SalaryRange;
use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings whose published salary band overlaps the range.
///
/// Listings without a published salary are left alone; use
/// [`SalaryPresentFilter`] to drop them.
pub struct SalaryRangeFilter {
    range: SalaryRange,
}

impl SalaryRangeFilter {
    pub fn new(range: SalaryRange) -> Self {
        Self { range }
    }
}

impl Filter for SalaryRangeFilter {
    fn name(&self) -> &str {
        "SalaryRangeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        match (listing.published_salary_min(), listing.published_salary_max()) {
            (Some(low), Some(high)) => low <= self.range.max && high >= self.range.min,
            _ => true,
        }
    }
}

/// Keeps listings that publish a minimum salary
pub struct SalaryPresentFilter;

impl Filter for SalaryPresentFilter {
    fn name(&self) -> &str {
        "SalaryPresentFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.published_salary_min().is_some()
    }
}
