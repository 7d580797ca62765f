pub mod footer;
pub mod header;
pub mod hero;
pub mod states;
