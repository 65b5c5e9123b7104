use std::path::PathBuf;

/// One generated file: a relative output path and its full text content.
///
/// Content is a deterministic function of the descriptor and emitter settings,
/// so re-emitting unchanged inputs produces byte-identical artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the generation output root.
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}
