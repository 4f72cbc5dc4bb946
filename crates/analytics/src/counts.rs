//! Category counts: group listings by a categorical field and tally them.

use data_loader::Listing;
use serde::Serialize;
use std::collections::HashMap;

/// Label used when a listing has no value for the grouped field
pub const FALLBACK_LABEL: &str = "Other";

/// Categorical fields listings can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    Sector,
    Location,
    Modality,
    Level,
    Area,
    Platform,
}

impl CategoryField {
    /// The raw value of this field on `listing`; empty when absent
    pub fn value(self, listing: &Listing) -> &str {
        match self {
            CategoryField::Sector => &listing.employer.sector,
            CategoryField::Location => &listing.employer.location,
            CategoryField::Modality => listing.modality_label(),
            CategoryField::Level => listing.level_label(),
            CategoryField::Area => &listing.position.area,
            CategoryField::Platform => listing.platform.label(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryField::Sector => "sector",
            CategoryField::Location => "location",
            CategoryField::Modality => "modality",
            CategoryField::Level => "level",
            CategoryField::Area => "area",
            CategoryField::Platform => "platform",
        }
    }
}

/// One (label, count) pair of a grouped tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count listings per value of `field`, most frequent first.
///
/// Empty values are counted under [`FALLBACK_LABEL`]. Labels with equal
/// counts keep the order in which they were first encountered.
pub fn category_counts<'a, I>(listings: I, field: CategoryField) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a Listing>,
{
    tally(listings.into_iter().map(|listing| {
        match field.value(listing) {
            "" => FALLBACK_LABEL,
            value => value,
        }
    }))
}

/// Count occurrences of each label and sort by count descending.
///
/// The sort is stable, so ties stay in first-seen order.
pub(crate) fn tally<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for label in labels {
        match positions.get(label) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
