//! Named image and sound resources, and the dimensions the simulation needs from them.

use serde::Serialize;

/// Pixel dimensions of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The five images the game draws, by logical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ImageAsset {
    Bird,
    PipeNorth,
    PipeSouth,
    Background,
    Foreground,
}

impl ImageAsset {
    pub const ALL: [ImageAsset; 5] = [
        ImageAsset::Bird,
        ImageAsset::PipeNorth,
        ImageAsset::PipeSouth,
        ImageAsset::Background,
        ImageAsset::Foreground,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ImageAsset::Bird => "bird.png",
            ImageAsset::PipeNorth => "pipeNorth.png",
            ImageAsset::PipeSouth => "pipeSouth.png",
            ImageAsset::Background => "background.jpg",
            ImageAsset::Foreground => "foreground.png",
        }
    }

    /// Human-readable role, used on the loading screen and in log lines.
    pub fn label(self) -> &'static str {
        match self {
            ImageAsset::Bird => "bird sprite",
            ImageAsset::PipeNorth => "upper pipe",
            ImageAsset::PipeSouth => "lower pipe",
            ImageAsset::Background => "background",
            ImageAsset::Foreground => "foreground",
        }
    }

    /// Dimensions reported by the built-in asset source.
    pub fn builtin_dimensions(self) -> Dimensions {
        match self {
            ImageAsset::Bird => Dimensions::new(38, 26),
            ImageAsset::PipeNorth => Dimensions::new(52, 242),
            ImageAsset::PipeSouth => Dimensions::new(52, 378),
            ImageAsset::Background => Dimensions::new(288, 512),
            ImageAsset::Foreground => Dimensions::new(306, 118),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ImageAsset::Bird => 0,
            ImageAsset::PipeNorth => 1,
            ImageAsset::PipeSouth => 2,
            ImageAsset::Background => 3,
            ImageAsset::Foreground => 4,
        }
    }
}

/// The three sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClip {
    Flap,
    Score,
    Collision,
}

impl SoundClip {
    pub const ALL: [SoundClip; 3] = [SoundClip::Flap, SoundClip::Score, SoundClip::Collision];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundClip::Flap => "flap.mp3",
            SoundClip::Score => "score.mp3",
            SoundClip::Collision => "collision.mp3",
        }
    }
}

/// Dimensions of every image, available only once all of them are ready.
///
/// Outside of the built-in set, the only way to obtain one is from an
/// [`AssetGate`](super::gate::AssetGate) that has opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpriteSheet {
    dimensions: [Dimensions; 5],
}

impl SpriteSheet {
    pub(crate) fn from_dimensions(dimensions: [Dimensions; 5]) -> Self {
        Self { dimensions }
    }

    /// The sheet the built-in asset source produces.
    pub fn builtin() -> Self {
        Self::from_dimensions(ImageAsset::ALL.map(ImageAsset::builtin_dimensions))
    }

    pub fn get(&self, asset: ImageAsset) -> Dimensions {
        self.dimensions[asset.index()]
    }

    pub fn bird(&self) -> Dimensions {
        self.get(ImageAsset::Bird)
    }

    pub fn pipe_north(&self) -> Dimensions {
        self.get(ImageAsset::PipeNorth)
    }

    pub fn pipe_south(&self) -> Dimensions {
        self.get(ImageAsset::PipeSouth)
    }

    pub fn background(&self) -> Dimensions {
        self.get(ImageAsset::Background)
    }

    pub fn foreground(&self) -> Dimensions {
        self.get(ImageAsset::Foreground)
    }
}
