use crate::error::{EngineError, EngineResult};

/// Placeholder voice for builds without the `audio` feature. Never constructed.
pub struct MasteringVoice {
    _private: (),
}

impl MasteringVoice {
    pub(super) fn open_default() -> EngineResult<Self> {
        Err(EngineError::resource(
            "mastering voice",
            "built without the `audio` feature",
        ))
    }
}
