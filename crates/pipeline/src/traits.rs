//! Core trait for the filtering pipeline.
//!
//! Each active criterion becomes one `Filter`. Filters are independent of
//! each other, so the pipeline may run them in any order.

use data_loader::Listing;

/// A single include/exclude rule over listings.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared freely
/// - `matches` is total: a filter never fails, it only excludes
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `listing` passes this filter
    fn matches(&self, listing: &Listing) -> bool;

    /// Keep the listings that pass this filter, preserving order
    fn apply<'a>(&self, listings: Vec<&'a Listing>) -> Vec<&'a Listing> {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}
