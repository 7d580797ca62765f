pub mod context;
pub mod create;
pub mod edit;
pub mod scroll_lock;
pub mod shell;
pub mod validation;
