//! Skill frequency across listings.

use crate::counts::tally;
use data_loader::Listing;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// The `top_n` most requested technical skills.
///
/// Skills are counted exactly as written (case-sensitive). Ties keep
/// first-seen order; `top_n == 0` yields an empty list.
pub fn skill_frequency<'a, I>(listings: I, top_n: usize) -> Vec<SkillCount>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let skills = listings
        .into_iter()
        .flat_map(|listing| listing.requirements.technical_skills.iter())
        .map(String::as_str);

    tally(skills)
        .into_iter()
        .take(top_n)
        .map(|entry| SkillCount {
            skill: entry.label,
            count: entry.count,
        })
        .collect()
}
