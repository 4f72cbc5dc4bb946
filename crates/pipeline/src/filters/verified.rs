//! Filter on employer verification.

use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings from verified employers
pub struct VerifiedOnlyFilter;

impl Filter for VerifiedOnlyFilter {
    fn name(&self) -> &str {
        "VerifiedOnlyFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.employer.verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_verified_only() {
        let mut verified = listing("1");
        verified.employer.verified = true;

        assert!(VerifiedOnlyFilter.matches(&verified));
        assert!(!VerifiedOnlyFilter.matches(&listing("2")));
    }
}
