pub mod app_shell;
pub mod detail;
pub mod grid;
pub mod textures;
pub mod toast;
