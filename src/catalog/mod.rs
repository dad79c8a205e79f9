pub mod assets;
pub mod models;
pub mod presets;
