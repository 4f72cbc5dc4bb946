//! The FilterPipeline composes the filters for a set of criteria.
//!
//! Every filter is conjunctive, so the order filters are added in only
//! changes how quickly the working set shrinks, never the result.

use crate::criteria::FilterCriteria;
use crate::filters::*;
use crate::traits::Filter;
use data_loader::Listing;
use tracing::debug;

/// Chains filters together into a single include/exclude decision.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextQueryFilter::new("java"))
///     .add_filter(MaxExperienceFilter::new(3))
///     .add_filter(VerifiedOnlyFilter);
///
/// let visible = pipeline.apply(index.listings());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for `criteria`, one filter per active criterion.
    ///
    /// Unset criteria add nothing, so default criteria yield an empty
    /// pipeline that keeps every listing.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if !criteria.query.is_empty() {
            pipeline = pipeline.add_filter(TextQueryFilter::new(&criteria.query));
        }
        if !criteria.locations.is_empty() {
            pipeline = pipeline.add_filter(TextMembershipFilter::locations(criteria.locations.clone()));
        }
        if !criteria.modalities.is_empty() {
            pipeline = pipeline.add_filter(MembershipFilter::modalities(criteria.modalities.clone()));
        }
        if !criteria.levels.is_empty() {
            pipeline = pipeline.add_filter(MembershipFilter::levels(criteria.levels.clone()));
        }
        if !criteria.platforms.is_empty() {
            pipeline = pipeline.add_filter(MembershipFilter::platforms(criteria.platforms.clone()));
        }
        if !criteria.sectors.is_empty() {
            pipeline = pipeline.add_filter(TextMembershipFilter::sectors(criteria.sectors.clone()));
        }
        if !criteria.areas.is_empty() {
            pipeline = pipeline.add_filter(TextMembershipFilter::areas(criteria.areas.clone()));
        }
        if let Some(range) = criteria.salary_range {
            pipeline = pipeline.add_filter(SalaryRangeFilter::new(range));
        }
        if let Some(max_years) = criteria.max_experience {
            pipeline = pipeline.add_filter(MaxExperienceFilter::new(max_years));
        }
        if !criteria.required_skills.is_empty() {
            pipeline = pipeline.add_filter(RequiredSkillsFilter::new(&criteria.required_skills));
        }
        if criteria.posted_from.is_some() || criteria.posted_to.is_some() {
            pipeline = pipeline.add_filter(PostedDateFilter::new(criteria.posted_from, criteria.posted_to));
        }
        if criteria.verified_only {
            pipeline = pipeline.add_filter(VerifiedOnlyFilter);
        }
        if criteria.salary_only {
            pipeline = pipeline.add_filter(SalaryPresentFilter);
        }

        pipeline
    }

    /// Whether `listing` passes every filter
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|filter| filter.matches(listing))
    }

    /// Apply all filters in sequence, preserving dataset order.
    ///
    /// Logs each filter's input and output counts at debug level.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut current: Vec<&'a Listing> = listings.into_iter().collect();
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
