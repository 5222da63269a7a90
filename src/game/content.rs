// Loading of RON content files (levels and movement tuning)

use std::fs;
use std::path::Path;

use ron::extensions::Extensions;
use ron::Options;
use serde::de::DeserializeOwned;

use crate::engine::physics::SimError;

/// Errors raised while loading or validating content
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("Invalid content: {0}")]
    Invalid(String),

    #[error(transparent)]
    Physics(#[from] SimError),
}

/// RON options with implicit `Some` so optional fields can be written bare
fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

/// Parse RON text; `origin` names the source in error messages
pub fn parse_ron<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T, ContentError> {
    ron_options()
        .from_str(text)
        .map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })
}

/// Read and parse a RON file
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let origin = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: origin.clone(),
        source,
    })?;
    log::debug!("Loaded {} ({} bytes)", origin, text.len());
    parse_ron(&text, &origin)
}
