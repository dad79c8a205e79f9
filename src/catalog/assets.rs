use crate::catalog::models::ImageRef;
use crate::host::ports::AssetSource;

static BUNDLED_ASSETS: [(&str, &[u8]); 4] = [
    (
        "mountain_sunset.png",
        include_bytes!("../../assets/mountain_sunset.png"),
    ),
    ("ocean_dusk.png", include_bytes!("../../assets/ocean_dusk.png")),
    (
        "forest_canopy.png",
        include_bytes!("../../assets/forest_canopy.png"),
    ),
    (
        "desert_dunes.png",
        include_bytes!("../../assets/desert_dunes.png"),
    ),
];

/// Image bytes compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
    fn load(&self, image: ImageRef) -> Option<&[u8]> {
        BUNDLED_ASSETS
            .iter()
            .find(|(name, _)| *name == image.asset_name())
            .map(|(_, bytes)| *bytes)
    }
}
