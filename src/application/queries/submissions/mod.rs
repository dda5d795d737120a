mod list;
mod service;

pub use list::ListPendingQuery;
pub use service::SubmissionQueryService;
