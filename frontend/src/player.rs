pub mod components;
pub mod fullscreen;
pub mod keyboard;
pub mod media;
pub mod preview;
pub mod progress;
pub mod speed;
pub mod state;
pub mod volume;
