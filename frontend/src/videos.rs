pub mod components;
pub mod details;
pub mod sidebar;
pub mod sort;
