pub mod build;
pub mod common;
pub mod name;
pub mod peers;
