pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewSubmission, Submission};
pub use repository::{PublicationRepository, SubmissionRepository};
pub use value_objects::{AuthorHandle, SubmissionContent, SubmissionId, SubmissionTitle};
