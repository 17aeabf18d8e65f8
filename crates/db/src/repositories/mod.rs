//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod contact_repo;
pub mod education_repo;
pub mod internship_repo;
pub mod project_repo;
pub mod skill_repo;

pub use contact_repo::ContactRepo;
pub use education_repo::EducationRepo;
pub use internship_repo::InternshipRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
