/// Error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The session was opened from a share link and cannot be modified.
    #[error("draft order is locked and cannot be modified")]
    Locked,
    /// Empty (or whitespace-only) participant name.
    #[error("name must not be empty")]
    EmptyName,
    /// A participant with the same name already exists.
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    /// No participant with the given name.
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),
    /// Sharing requires at least one participant.
    #[error("nothing to share: add some names first")]
    NothingToShare,
    /// The share link carries no payload parameter.
    #[error("share link has no `{0}` parameter")]
    MissingShareData(&'static str),
    /// JSON error.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// Parse url error.
    #[error("parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    /// `--config` names a file that does not exist.
    #[error("config file not found: {}", .0.display())]
    MissingConfigFile(std::path::PathBuf),
    /// A config value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Config error.
    #[error("config: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
