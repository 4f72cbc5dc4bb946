//! # Data Loader Crate
//!
//! This crate loads, validates and exports the job listings dataset.
//!
//! ## Main Components
//!
//! - **types**: Listing and its sub-records (employer, position, compensation, ...)
//! - **parser**: Parse the JSON dataset and user-typed labels
//! - **index**: ListingIndex owning the immutable listing set
//! - **scraped**: Turn raw scraper rows into listings
//! - **export**: JSON and CSV serialization of listings
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::ListingIndex;
//! use std::path::Path;
//!
//! let index = ListingIndex::load_from_file(Path::new("data/listings.json"))?;
//! let listing = index.get("42").unwrap();
//! println!("{} at {}", listing.position.title, listing.employer.name);
//! ```

pub mod error;
pub mod export;
pub mod index;
pub mod parser;
pub mod scraped;
pub mod types;

pub use error::{DataLoadError, Result};
pub use export::ExportFormat;
pub use index::{Facets, ListingIndex};
pub use scraped::{transform_scraped, ScrapedJob};
pub use types::{
    // Type aliases
    ListingId,
    Salary,
    // Core types
    Compensation,
    Employer,
    LanguageRequirement,
    Listing,
    ListingMetadata,
    Position,
    Requirements,
    // Enums
    CompanySize,
    ContractType,
    EducationLevel,
    ListingStatus,
    Modality,
    Platform,
    Schedule,
    SeniorityLevel,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::listing;

    #[test]
    fn test_load_dataset_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("listings.json");
        let body = serde_json::to_string(&vec![listing("1"), listing("2")]).unwrap();
        std::fs::write(&path, body).unwrap();

        let index = ListingIndex::load_from_file(&path).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("1").unwrap().employer.name, "Bancolombia");
    }

    #[test]
    fn test_bundled_dataset_loads() {
        // The sample dataset ships at the workspace root
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/listings.json");

        let index = ListingIndex::load_from_file(&path).unwrap();
        assert_eq!(index.len(), 10);

        // Listing 5 carries an empty modality, counted under "Other"
        let blank = index.get("5").unwrap();
        assert_eq!(blank.position.modality, None);
        assert_eq!(blank.modality_label(), "");
        let blanks = index
            .listings()
            .iter()
            .filter(|listing| listing.position.modality.is_none())
            .count();
        assert_eq!(blanks, 1);

        let facets = index.facets();
        assert_eq!(
            facets.modalities,
            vec![Modality::Hybrid, Modality::OnSite, Modality::Remote]
        );
    }
}
