pub mod database;
pub mod migration;
pub mod render;
pub mod repositories;
pub mod storage;
pub mod time;
pub mod util;
