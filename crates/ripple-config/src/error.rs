//! Configuration errors.

use std::fmt;
use std::path::PathBuf;

use ripple_core::EffectId;
use thiserror::Error;

/// File operation that failed, used in [`ConfigError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Reading a preset.
    Read,
    /// Writing a preset.
    Write,
    /// Creating the directory a preset is saved into.
    CreateDir,
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileOp::Read => "read",
            FileOp::Write => "write",
            FileOp::CreateDir => "create directory",
        })
    }
}

/// Everything that can go wrong loading presets or driving a rack.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem failure on a preset path.
    #[error("cannot {op} {}: {source}", path.display())]
    Io {
        /// What was being attempted.
        op: FileOp,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Preset text is not valid TOML or has the wrong shape.
    #[error("invalid preset TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preset could not be encoded as TOML.
    #[error("cannot encode preset as TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    /// No registry entry for this kind.
    #[error("unknown effect type: {0}")]
    UnknownEffect(String),

    /// The rack holds no effect with this id.
    #[error("no effect with id {0}")]
    UnknownEffectId(EffectId),

    /// A parameter name the effect does not have, or a value that does not parse.
    #[error("{effect}.{param}: {reason}")]
    InvalidParameter {
        /// Effect kind.
        effect: String,
        /// Parameter key as given.
        param: String,
        /// What was wrong.
        reason: String,
    },
}

impl ConfigError {
    /// Wrap an I/O error with the operation and path it came from.
    pub fn io(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Shorthand for [`ConfigError::InvalidParameter`].
    pub fn invalid_param(
        effect: impl Into<String>,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidParameter {
            effect: effect.into(),
            param: param.into(),
            reason: reason.into(),
        }
    }
}
