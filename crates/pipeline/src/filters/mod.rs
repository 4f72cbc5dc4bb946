//! Filter implementations for the listing pipeline.
//!
//! One filter per criterion; `FilterPipeline::from_criteria` only adds the
//! filters whose criterion is set.

pub mod experience;
pub mod membership;
pub mod posted_date;
pub mod required_skills;
pub mod salary;
pub mod text_query;
pub mod verified;

// Re-export for convenience
pub use experience::MaxExperienceFilter;
pub use membership::{MembershipFilter, TextMembershipFilter};
pub use posted_date::PostedDateFilter;
pub use required_skills::RequiredSkillsFilter;
pub use salary::{SalaryPresentFilter, SalaryRangeFilter};
pub use text_query::TextQueryFilter;
pub use verified::VerifiedOnlyFilter;
