pub mod album;
pub mod form;
