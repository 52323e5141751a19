pub mod catalogs;
pub mod filesystem;
