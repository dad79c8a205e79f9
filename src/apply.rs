use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::models::ImageRef;
use crate::engine::decode::decode_wallpaper;
use crate::host::ports::HostContext;

pub const APPLY_SUCCESS_MESSAGE: &str = "Wallpaper set successfully";
pub const APPLY_FAILURE_MESSAGE: &str = "Failed to set wallpaper";

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("asset {0} is not bundled")]
    MissingAsset(&'static str),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("failed to stage wallpaper: {0}")]
    Staging(#[from] std::io::Error),
    #[error("host rejected wallpaper: {0}")]
    Platform(String),
}

#[derive(Debug)]
pub enum ApplyOutcome {
    Applied,
    Failed(ApplyError),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Decodes `image` and asks the host to use it as the wallpaper.
///
/// Never fails from the caller's point of view: the user is told about the
/// result through `host.notifier`, and the cause of a failure is only logged
/// and handed back in the outcome.
pub fn apply_wallpaper(host: &HostContext<'_>, image: ImageRef) -> ApplyOutcome {
    match try_apply(host, image) {
        Ok(()) => {
            info!(asset = image.asset_name(), "wallpaper applied");
            host.notifier.show_short(APPLY_SUCCESS_MESSAGE);
            ApplyOutcome::Applied
        }
        Err(error) => {
            warn!(asset = image.asset_name(), %error, "wallpaper apply failed");
            host.notifier.show_short(APPLY_FAILURE_MESSAGE);
            ApplyOutcome::Failed(error)
        }
    }
}

fn try_apply(host: &HostContext<'_>, image: ImageRef) -> Result<(), ApplyError> {
    let bytes = host
        .assets
        .load(image)
        .ok_or(ApplyError::MissingAsset(image.asset_name()))?;
    let decoded = decode_wallpaper(bytes)?;
    host.wallpaper.set_wallpaper(image, &decoded)
}
