//! Audio output: an engine handle owning the mastering voice.
//!
//! With the `audio` feature the voice is a rodio output stream on the default
//! device. Without it, [`AudioEngine::new`] always fails with a
//! `ResourceCreation` error so callers take the same "no audio" path they take
//! on a machine without an output device.

#[cfg(feature = "audio")]
mod real;

#[cfg(feature = "audio")]
pub use real::MasteringVoice;

#[cfg(not(feature = "audio"))]
mod stub;

#[cfg(not(feature = "audio"))]
pub use stub::MasteringVoice;

use crate::error::EngineResult;

/// Audio engine. Dropping it closes the output stream.
pub struct AudioEngine {
    _voice: MasteringVoice,
}

impl AudioEngine {
    /// Opens the mastering voice on the default output device.
    pub fn new() -> EngineResult<Self> {
        let voice = MasteringVoice::open_default()?;
        log::info!("audio: mastering voice ready");
        Ok(Self { _voice: voice })
    }

    /// Starts the engine, logging instead of failing when no output exists.
    pub fn try_start() -> Option<Self> {
        match Self::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                log::warn!("audio disabled: {e}");
                None
            }
        }
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        log::debug!("audio: engine shut down");
    }
}
