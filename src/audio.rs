//! Fire-and-forget sound cues.
//!
//! Playback never blocks the frame loop and never reports back: a cue that
//! cannot be played is logged and dropped.

use crate::assets::{AssetSource, SoundClip};
use crate::core::TickEvent;

/// Something that can play a sound cue.
pub trait SoundPlayer {
    fn play(&self, clip: SoundClip);
}

/// Plays nothing; records the cue in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, clip: SoundClip) {
        log::debug!("sound cue: {}", clip.file_name());
    }
}

/// The cue that goes with a tick event.
pub fn cue_for(event: &TickEvent) -> SoundClip {
    match event {
        TickEvent::Scored { .. } => SoundClip::Score,
        TickEvent::Crashed { .. } => SoundClip::Collision,
    }
}

/// Pick a player for the asset source. Real playback needs both a sound
/// directory and the `audio` feature.
pub fn player_for(source: &AssetSource) -> Box<dyn SoundPlayer> {
    #[cfg(feature = "audio")]
    {
        if let AssetSource::Directory(_) = source {
            match rodio_player::RodioPlayer::new(source.clone()) {
                Ok(player) => return Box::new(player),
                Err(e) => log::warn!("audio output unavailable, continuing silently: {e}"),
            }
        }
    }

    #[cfg(not(feature = "audio"))]
    {
        if let AssetSource::Directory(dir) = source {
            log::info!(
                "built without the `audio` feature; sounds in {} will not play",
                dir.join("sounds").display()
            );
        }
    }

    Box::new(SilentPlayer)
}

#[cfg(feature = "audio")]
mod rodio_player {
    use super::SoundPlayer;
    use crate::assets::{AssetSource, SoundClip};
    use rodio::{OutputStream, OutputStreamHandle};
    use std::fs::File;
    use std::io::BufReader;

    /// Decodes each cue from disk and detaches the sink.
    pub struct RodioPlayer {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        source: AssetSource,
    }

    impl RodioPlayer {
        pub fn new(source: AssetSource) -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
                source,
            })
        }
    }

    impl SoundPlayer for RodioPlayer {
        fn play(&self, clip: SoundClip) {
            let Some(path) = self.source.sound_path(clip) else {
                return;
            };
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) => {
                    log::warn!("cannot open {}: {e}", path.display());
                    return;
                }
            };
            match self.handle.play_once(BufReader::new(file)) {
                Ok(sink) => sink.detach(),
                Err(e) => log::warn!("cannot play {}: {e}", path.display()),
            }
        }
    }
}
