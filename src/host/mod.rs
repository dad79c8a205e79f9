pub mod desktop;
pub mod ports;

pub use desktop::{DesktopWallpaper, StderrNotifier};
pub use ports::{AssetSource, HostContext, Notifier, WallpaperSetter};
