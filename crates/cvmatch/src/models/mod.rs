mod candidate;
mod job;

pub use candidate::{
    CandidateBasics, CandidateRecord, EducationEntry, ExperienceEntry, LanguageSkill,
};
pub use job::{JobBasics, JobRecord};
