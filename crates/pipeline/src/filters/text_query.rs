//! Free-text search over title, employer and technical skills.

use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings whose title, employer name, or any technical skill
/// contains the query, ignoring case.
pub struct TextQueryFilter {
    needle: String,
}

impl TextQueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    fn contains(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl Filter for TextQueryFilter {
    fn name(&self) -> &str {
        "TextQueryFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.contains(&listing.position.title)
            || self.contains(&listing.employer.name)
            || listing
                .requirements
                .technical_skills
                .iter()
                .any(|skill| self.contains(skill))
    }
}
