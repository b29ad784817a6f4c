pub mod constants;
pub mod field;
pub mod grid;
pub mod links;
pub mod scene;
