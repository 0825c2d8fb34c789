pub mod category;
pub mod project;
