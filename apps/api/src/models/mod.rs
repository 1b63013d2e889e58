pub mod interview;
pub mod profile;
