pub mod build;
pub mod page;
