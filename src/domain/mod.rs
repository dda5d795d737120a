pub mod article;
pub mod category;
pub mod errors;
pub mod submission;

pub use category::Category;
