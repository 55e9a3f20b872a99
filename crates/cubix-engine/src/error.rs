use std::path::PathBuf;

/// Typed failures raised while creating engine resources.
///
/// All of these occur at startup or while loading assets. None of them is
/// retried; callers propagate them and abort initialization.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A GPU object, decoder, or platform resource could not be created.
    #[error("failed to create {what}: {reason}")]
    ResourceCreation { what: String, reason: String },

    /// An asset file does not exist on disk.
    #[error("asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    /// The embedded shader failed to compile on this device.
    #[error("shader `{label}` failed to compile:\n{}", messages.join("\n"))]
    ShaderCompilation { label: String, messages: Vec<String> },
}

impl EngineError {
    pub fn resource(what: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceCreation {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
