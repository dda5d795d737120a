// src/application/commands/articles/mod.rs
mod delete;
mod service;

pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
