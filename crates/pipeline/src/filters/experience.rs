//! Filter on required years of experience.

use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings asking for at most `max_years` of experience
pub struct MaxExperienceFilter {
    max_years: u32,
}

impl MaxExperienceFilter {
    pub fn new(max_years: u32) -> Self {
        Self { max_years }
    }
}

impl Filter for MaxExperienceFilter {
    fn name(&self) -> &str {
        "MaxExperienceFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.requirements.experience_years <= self.max_years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_bound_is_inclusive() {
        let mut two = listing("1");
        two.requirements.experience_years = 2;
        let mut five = listing("2");
        five.requirements.experience_years = 5;

        let filter = MaxExperienceFilter::new(2);
        assert!(filter.matches(&two));
        assert!(!filter.matches(&five));
    }
}
