//! Parser for the listings dataset and for user-supplied labels.
//!
//! The dataset is a single JSON array of listings in the scrapers' wire
//! format (see [`crate::types`]). Labels typed on the command line are
//! matched case-insensitively against the same vocabulary.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Open a file, reporting a missing path as [`DataLoadError::FileNotFound`]
pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(err),
    })
}

/// Parse a JSON array of listings from any reader
pub fn parse_listings<R: Read>(reader: R) -> Result<Vec<Listing>> {
    let listings = serde_json::from_reader(reader)?;
    Ok(listings)
}

/// Read and parse the dataset file at `path`
pub fn read_listings(path: &Path) -> Result<Vec<Listing>> {
    let file = open(path)?;
    parse_listings(BufReader::new(file))
}

fn invalid(field: &str, value: &str) -> DataLoadError {
    DataLoadError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Match `s` against a label vocabulary, ignoring case and surrounding whitespace
fn match_label<T: Copy>(
    field: &str,
    s: &str,
    candidates: impl IntoIterator<Item = T>,
    label: impl Fn(T) -> &'static str,
) -> Result<T> {
    let wanted = s.trim().to_lowercase();
    candidates
        .into_iter()
        .find(|&candidate| label(candidate).to_lowercase() == wanted)
        .ok_or_else(|| invalid(field, s))
}

pub fn parse_modality(s: &str) -> Result<Modality> {
    match_label("modality", s, Modality::all(), Modality::label)
}

pub fn parse_level(s: &str) -> Result<SeniorityLevel> {
    match_label("level", s, SeniorityLevel::all(), SeniorityLevel::label)
}

pub fn parse_platform(s: &str) -> Result<Platform> {
    match_label("platform", s, Platform::all(), Platform::label)
}

impl FromStr for Modality {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        parse_modality(s)
    }
}

impl FromStr for SeniorityLevel {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        parse_level(s)
    }
}

impl FromStr for Platform {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        parse_platform(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures;

    #[test]
    fn test_parse_modality_ignores_case() {
        assert_eq!(parse_modality("remoto").unwrap(), Modality::Remote);
        assert_eq!(parse_modality(" Híbrido ").unwrap(), Modality::Hybrid);
        assert!(parse_modality("Teletrabajo").is_err());
    }

    #[test]
    fn test_parse_level_uses_dataset_labels() {
        assert_eq!(
            "semi-senior".parse::<SeniorityLevel>().unwrap(),
            SeniorityLevel::SemiSenior
        );
        assert_eq!(
            "No especificado".parse::<SeniorityLevel>().unwrap(),
            SeniorityLevel::Unspecified
        );
    }

    #[test]
    fn test_parse_platform_error_names_field() {
        let err = parse_platform("Monster").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for platform: Monster");
    }

    #[test]
    fn test_parse_listings_from_reader() {
        let body = serde_json::to_string(&vec![fixtures::listing("1"), fixtures::listing("2")])
            .unwrap();
        let listings = parse_listings(body.as_bytes()).unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].id, "2");
    }

    #[test]
    fn test_missing_file_is_reported_by_path() {
        let err = read_listings(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
