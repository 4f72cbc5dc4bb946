//! ListingIndex building and validation.
//!
//! The index owns the immutable listing set for the lifetime of the
//! process. Derived views (aggregates, filtered subsets) borrow from it and
//! are never stored back.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Owns every listing plus an id lookup.
#[derive(Debug, Default)]
pub struct ListingIndex {
    listings: Vec<Listing>,
    by_id: HashMap<ListingId, usize>,
}

/// Distinct filter choices present in a dataset, in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facets {
    pub locations: Vec<String>,
    pub modalities: Vec<Modality>,
    pub levels: Vec<SeniorityLevel>,
}

impl ListingIndex {
    /// Load and validate the dataset file.
    ///
    /// Steps:
    /// 1. Parse the JSON array
    /// 2. Validate ids and salary bounds
    /// 3. Build the id lookup
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let listings = parser::read_listings(path)?;
        let index = Self::from_listings(listings)?;
        info!(
            path = %path.display(),
            listings = index.len(),
            "loaded listings dataset"
        );
        Ok(index)
    }

    /// Build an index from already-parsed listings, enforcing dataset invariants
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        validate(&listings)?;

        let by_id = listings
            .iter()
            .enumerate()
            .map(|(position, listing)| (listing.id.clone(), position))
            .collect();

        Ok(Self { listings, by_id })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.by_id.get(id).map(|&position| &self.listings[position])
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct locations, modalities and levels offered as filter choices
    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        let mut seen_locations = HashSet::new();

        for listing in &self.listings {
            let location = listing.employer.location.as_str();
            if !location.is_empty() && seen_locations.insert(location) {
                facets.locations.push(location.to_string());
            }
            if let Some(modality) = listing.position.modality
                && !facets.modalities.contains(&modality)
            {
                facets.modalities.push(modality);
            }
            if let Some(level) = listing.position.level
                && !facets.levels.contains(&level)
            {
                facets.levels.push(level);
            }
        }

        facets
    }
}

/// Check that ids are unique and salary bounds are ordered.
///
/// Returns the first violation found.
pub fn validate(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id.as_str()) {
            return Err(DataLoadError::DuplicateId {
                id: listing.id.clone(),
            });
        }

        let compensation = &listing.compensation;
        if let (Some(min), Some(max)) = (compensation.salary_min, compensation.salary_max)
            && min > max
        {
            return Err(DataLoadError::SalaryBounds {
                id: listing.id.clone(),
                min,
                max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::listing;

    #[test]
    fn test_lookup_by_id() {
        let index = ListingIndex::from_listings(vec![listing("a"), listing("b")]).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("b").unwrap().id, "b");
        assert!(index.get("zzz").is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = ListingIndex::from_listings(vec![listing("a"), listing("a")]).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn test_inverted_salary_bounds_are_rejected() {
        let mut bad = listing("x");
        bad.compensation.salary_min = Some(9_000_000);
        bad.compensation.salary_max = Some(4_000_000);

        let err = ListingIndex::from_listings(vec![listing("a"), bad]).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::SalaryBounds { min: 9_000_000, max: 4_000_000, .. }
        ));
    }

    #[test]
    fn test_one_sided_salary_is_valid() {
        let mut only_min = listing("x");
        only_min.compensation.salary_max = None;

        assert!(ListingIndex::from_listings(vec![only_min]).is_ok());
    }

    #[test]
    fn test_facets_keep_first_seen_order() {
        let mut remote = listing("b");
        remote.employer.location = "Envigado".to_string();
        remote.position.modality = Some(Modality::Remote);
        remote.position.level = None;

        let index =
            ListingIndex::from_listings(vec![listing("a"), remote, listing("c")]).unwrap();
        let facets = index.facets();

        assert_eq!(facets.locations, vec!["Medellín", "Envigado"]);
        assert_eq!(facets.modalities, vec![Modality::Hybrid, Modality::Remote]);
        assert_eq!(facets.levels, vec![SeniorityLevel::SemiSenior]);
    }

    #[test]
    fn test_empty_index() {
        let index = ListingIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.facets(), Facets::default());
    }
}
