// src/infrastructure/repositories/mod.rs
mod error;
mod files;
mod postgres_article;
mod postgres_publication;
mod postgres_submission;

pub use error::map_sqlx;
pub use files::FileStore;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_publication::PostgresPublicationRepository;
pub use postgres_submission::PostgresSubmissionRepository;
