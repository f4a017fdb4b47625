// Compiled-in portfolio content: project records and skill records.
//
// Everything in this crate is immutable reference data baked in at build
// time. The view layer reads it through the list functions below; there
// are no mutation operations.

mod project;
mod skill;

pub use project::{ProjectRecord, find_project, projects};
pub use skill::{SkillCategory, SkillProficiency, proficiencies, skill_categories};
