// src/application/commands/submissions/mod.rs
mod approve;
mod reject;
mod service;
mod submit;

pub use approve::ApproveSubmissionCommand;
pub use reject::RejectSubmissionCommand;
pub use service::SubmissionCommandService;
pub use submit::SubmitCommand;
