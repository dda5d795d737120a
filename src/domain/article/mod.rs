pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, NewArticle, newest_first};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleSlug;
