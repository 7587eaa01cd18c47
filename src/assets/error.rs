use super::types::ImageAsset;
use std::fmt;
use std::path::PathBuf;

/// Why the asset gate could not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The image file does not exist.
    Missing { asset: ImageAsset, path: PathBuf },
    /// The file exists but its header could not be read as an image.
    Decode { asset: ImageAsset, reason: String },
    /// Some images never reported within the load timeout.
    TimedOut { pending: Vec<ImageAsset> },
    /// Every loader hung up before all images reported.
    LoaderDisconnected,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { asset, path } => {
                write!(f, "{} not found at {}", asset.label(), path.display())
            }
            Self::Decode { asset, reason } => {
                write!(f, "could not read {}: {reason}", asset.label())
            }
            Self::TimedOut { pending } => {
                let names: Vec<&str> = pending.iter().map(|a| a.label()).collect();
                write!(f, "timed out waiting for: {}", names.join(", "))
            }
            Self::LoaderDisconnected => write!(f, "asset loader stopped before all images loaded"),
        }
    }
}

impl std::error::Error for AssetError {}
