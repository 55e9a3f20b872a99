use rodio::stream::{OutputStream, OutputStreamBuilder};

use crate::error::{EngineError, EngineResult};

/// Final mix stage: the default output stream. Sound stops when it drops.
pub struct MasteringVoice {
    _stream: OutputStream,
}

impl MasteringVoice {
    pub(super) fn open_default() -> EngineResult<Self> {
        let stream = OutputStreamBuilder::from_default_device()
            .map_err(|e| EngineError::resource("audio device", e))?
            .open_stream_or_fallback()
            .map_err(|e| EngineError::resource("mastering voice", e))?;
        Ok(Self { _stream: stream })
    }
}
