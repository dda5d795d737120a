pub mod articles;
pub mod submissions;

pub use articles::{ArticleDto, ArticleSummaryDto};
pub use submissions::{ApprovalDto, SubmissionDto};
