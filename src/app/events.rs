use crate::catalog::models::WallpaperId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    ItemChosen(WallpaperId),
    Back,
    Apply,
}
