//! Filter on posting date.

use crate::traits::Filter;
use chrono::NaiveDate;
use data_loader::Listing;

/// Keeps listings posted within `[from, to]`; either bound may be open
pub struct PostedDateFilter {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl PostedDateFilter {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }
}

impl Filter for PostedDateFilter {
    fn name(&self) -> &str {
        "PostedDateFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        let posted = listing.metadata.posted_on;
        self.from.is_none_or(|from| posted >= from) && self.to.is_none_or(|to| posted <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn posted(day: u32) -> Listing {
        let mut listing = listing("1");
        listing.metadata.posted_on = date(day);
        listing
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = PostedDateFilter::new(Some(date(10)), Some(date(20)));

        assert!(filter.matches(&posted(10)));
        assert!(filter.matches(&posted(20)));
        assert!(!filter.matches(&posted(9)));
        assert!(!filter.matches(&posted(21)));
    }

    #[test]
    fn test_open_bounds() {
        assert!(PostedDateFilter::new(None, Some(date(5))).matches(&posted(1)));
        assert!(PostedDateFilter::new(Some(date(5)), None).matches(&posted(31)));
    }
}
