pub mod articles;
pub mod submissions;
