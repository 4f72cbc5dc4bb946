//! Set-membership filters: the listing's value must be one of the selected ones.

use crate::traits::Filter;
use data_loader::{Listing, Modality, Platform, SeniorityLevel};

/// Membership on a free-text field (location, sector, area).
///
/// Values compare exactly, as offered by the dataset facets.
pub struct TextMembershipFilter {
    name: &'static str,
    allowed: Vec<String>,
    field: fn(&Listing) -> &str,
}

impl TextMembershipFilter {
    pub fn locations(allowed: Vec<String>) -> Self {
        Self {
            name: "LocationFilter",
            allowed,
            field: |listing| listing.employer.location.as_str(),
        }
    }

    pub fn sectors(allowed: Vec<String>) -> Self {
        Self {
            name: "SectorFilter",
            allowed,
            field: |listing| listing.employer.sector.as_str(),
        }
    }

    pub fn areas(allowed: Vec<String>) -> Self {
        Self {
            name: "AreaFilter",
            allowed,
            field: |listing| listing.position.area.as_str(),
        }
    }
}

impl Filter for TextMembershipFilter {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, listing: &Listing) -> bool {
        let value = (self.field)(listing);
        self.allowed.iter().any(|allowed| allowed == value)
    }
}

/// Membership on an enumerated field (modality, level, platform).
///
/// A listing with no value for the field never matches.
pub struct MembershipFilter<T> {
    name: &'static str,
    allowed: Vec<T>,
    key: fn(&Listing) -> Option<T>,
}

impl MembershipFilter<Modality> {
    pub fn modalities(allowed: Vec<Modality>) -> Self {
        Self {
            name: "ModalityFilter",
            allowed,
            key: |listing| listing.position.modality,
        }
    }
}

impl MembershipFilter<SeniorityLevel> {
    pub fn levels(allowed: Vec<SeniorityLevel>) -> Self {
        Self {
            name: "LevelFilter",
            allowed,
            key: |listing| listing.position.level,
        }
    }
}

impl MembershipFilter<Platform> {
    pub fn platforms(allowed: Vec<Platform>) -> Self {
        Self {
            name: "PlatformFilter",
            allowed,
            key: |listing| Some(listing.platform),
        }
    }
}

impl<T> Filter for MembershipFilter<T>
where
    T: PartialEq + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, listing: &Listing) -> bool {
        (self.key)(listing).is_some_and(|value| self.allowed.contains(&value))
    }
}
