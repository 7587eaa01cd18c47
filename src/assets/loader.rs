//! Background image loading.
//!
//! Each image is probed on its own thread and the result is posted over an
//! mpsc channel, so completions arrive in whatever order the filesystem
//! produces them. The driver drains the channel once per frame with
//! [`AssetLoader::poll`], which feeds the [`AssetGate`] and enforces the load
//! timeout.

use super::error::AssetError;
use super::gate::{AssetEvent, AssetGate, GateTransition};
use super::types::{Dimensions, ImageAsset, SoundClip};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// Where images and sounds come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Fixed dimensions compiled into the binary; no files are read.
    Builtin,
    /// `<dir>/images/*` and `<dir>/sounds/*`.
    Directory(PathBuf),
}

impl AssetSource {
    pub fn image_path(&self, asset: ImageAsset) -> Option<PathBuf> {
        match self {
            AssetSource::Builtin => None,
            AssetSource::Directory(dir) => Some(dir.join("images").join(asset.file_name())),
        }
    }

    pub fn sound_path(&self, clip: SoundClip) -> Option<PathBuf> {
        match self {
            AssetSource::Builtin => None,
            AssetSource::Directory(dir) => Some(dir.join("sounds").join(clip.file_name())),
        }
    }
}

/// Receiving end of one load attempt.
pub struct AssetLoader {
    rx: Receiver<AssetEvent>,
    started: Instant,
    timeout: Duration,
}

impl AssetLoader {
    /// Start loading every image from `source`.
    pub fn spawn(source: &AssetSource, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        for asset in ImageAsset::ALL {
            match source.image_path(asset) {
                None => {
                    let _ = tx.send(AssetEvent::Ready {
                        asset,
                        dimensions: asset.builtin_dimensions(),
                    });
                }
                Some(path) => {
                    let tx = tx.clone();
                    thread::spawn(move || {
                        // Receiver may be gone after a retry; nothing to do then.
                        let _ = tx.send(probe_image(asset, &path));
                    });
                }
            }
        }

        Self {
            rx,
            started: Instant::now(),
            timeout,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Drain pending completions into `gate`.
    ///
    /// Returns `Opened` or `Failed` at most once per gate; `Waiting` while
    /// images are still outstanding and the timeout has not passed.
    pub fn poll(&self, gate: &mut AssetGate) -> GateTransition {
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    log_event(&event);
                    let transition = gate.apply(event);
                    if matches!(
                        transition,
                        GateTransition::Opened(_) | GateTransition::Failed(_)
                    ) {
                        return transition;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if gate.is_collecting() {
                        return gate.fail(AssetError::LoaderDisconnected);
                    }
                    break;
                }
            }
        }

        if gate.is_collecting() && self.elapsed() >= self.timeout {
            return gate.time_out();
        }
        if gate.is_collecting() {
            GateTransition::Waiting
        } else {
            GateTransition::Ignored
        }
    }
}

fn log_event(event: &AssetEvent) {
    match event {
        AssetEvent::Ready { asset, dimensions } => log::info!(
            "{} ready ({}x{})",
            asset.label(),
            dimensions.width,
            dimensions.height
        ),
        AssetEvent::Failed { error, .. } => log::warn!("asset load failed: {error}"),
    }
}

/// Read just enough of the file to learn its pixel dimensions.
fn probe_image(asset: ImageAsset, path: &Path) -> AssetEvent {
    match image::image_dimensions(path) {
        Ok((width, height)) => AssetEvent::Ready {
            asset,
            dimensions: Dimensions::new(width, height),
        },
        Err(image::ImageError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
            AssetEvent::Failed {
                asset,
                error: AssetError::Missing {
                    asset,
                    path: path.to_path_buf(),
                },
            }
        }
        Err(e) => AssetEvent::Failed {
            asset,
            error: AssetError::Decode {
                asset,
                reason: e.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::types::SpriteSheet;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "skyward-loader-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    /// Poll until the gate leaves the waiting state (bounded).
    fn poll_until_settled(loader: &AssetLoader, gate: &mut AssetGate) -> GateTransition {
        for _ in 0..500 {
            match loader.poll(gate) {
                GateTransition::Waiting => thread::sleep(Duration::from_millis(5)),
                other => return other,
            }
        }
        GateTransition::Waiting
    }

    #[test]
    fn test_builtin_source_opens_immediately() {
        let loader = AssetLoader::spawn(&AssetSource::Builtin, Duration::from_secs(5));
        let mut gate = AssetGate::new();
        assert_eq!(
            loader.poll(&mut gate),
            GateTransition::Opened(SpriteSheet::builtin())
        );
        assert!(gate.is_open());
        // Nothing further to report
        assert_eq!(loader.poll(&mut gate), GateTransition::Ignored);
    }

    #[test]
    fn test_paths_for_directory_source() {
        let source = AssetSource::Directory(PathBuf::from("/opt/skyward"));
        assert_eq!(
            source.image_path(ImageAsset::PipeNorth),
            Some(PathBuf::from("/opt/skyward/images/pipeNorth.png"))
        );
        assert_eq!(
            source.sound_path(SoundClip::Score),
            Some(PathBuf::from("/opt/skyward/sounds/score.mp3"))
        );
        assert_eq!(AssetSource::Builtin.image_path(ImageAsset::Bird), None);
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = scratch_dir("missing");
        let loader = AssetLoader::spawn(
            &AssetSource::Directory(dir.clone()),
            Duration::from_secs(5),
        );
        let mut gate = AssetGate::new();
        match poll_until_settled(&loader, &mut gate) {
            GateTransition::Failed(AssetError::Missing { path, .. }) => {
                assert!(path.starts_with(&dir));
            }
            other => panic!("expected missing-file failure, got {:?}", other),
        }
        assert!(!gate.is_open());
    }

    #[test]
    fn test_directory_with_images_opens() {
        let dir = scratch_dir("images");
        let images = dir.join("images");
        std::fs::create_dir_all(&images).unwrap();
        let sizes = [
            (ImageAsset::Bird, 34, 24),
            (ImageAsset::PipeNorth, 26, 160),
            (ImageAsset::PipeSouth, 26, 200),
            (ImageAsset::Background, 144, 256),
            (ImageAsset::Foreground, 168, 56),
        ];
        for (asset, w, h) in sizes {
            image::RgbImage::new(w, h)
                .save(images.join(asset.file_name()))
                .unwrap();
        }

        let loader = AssetLoader::spawn(
            &AssetSource::Directory(dir.clone()),
            Duration::from_secs(5),
        );
        let mut gate = AssetGate::new();
        match poll_until_settled(&loader, &mut gate) {
            GateTransition::Opened(sheet) => {
                for (asset, w, h) in sizes {
                    assert_eq!(sheet.get(asset), Dimensions::new(w, h));
                }
            }
            other => panic!("expected open gate, got {:?}", other),
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zero_timeout_times_out_pending_images() {
        let dir = scratch_dir("timeout");
        let loader = AssetLoader::spawn(&AssetSource::Directory(dir), Duration::ZERO);
        let mut gate = AssetGate::new();
        // Either the missing-file reports win the race or the timeout does;
        // both must close the gate exactly once.
        let first = loader.poll(&mut gate);
        assert!(matches!(first, GateTransition::Failed(_)), "{:?}", first);
        assert!(!gate.is_collecting());
        assert!(!matches!(
            loader.poll(&mut gate),
            GateTransition::Opened(_) | GateTransition::Failed(_)
        ));
    }
}
