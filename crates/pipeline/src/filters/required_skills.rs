//! Filter on required technical skills.

use crate::traits::Filter;
use data_loader::Listing;

/// Keeps listings that ask for every one of the selected skills.
///
/// Skill names compare ignoring case.
pub struct RequiredSkillsFilter {
    skills: Vec<String>,
}

impl RequiredSkillsFilter {
    pub fn new(skills: &[String]) -> Self {
        Self {
            skills: skills.iter().map(|skill| skill.to_lowercase()).collect(),
        }
    }
}

impl Filter for RequiredSkillsFilter {
    fn name(&self) -> &str {
        "RequiredSkillsFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        let offered: Vec<String> = listing
            .requirements
            .technical_skills
            .iter()
            .map(|skill| skill.to_lowercase())
            .collect();

        self.skills.iter().all(|wanted| offered.contains(wanted))
    }
}
