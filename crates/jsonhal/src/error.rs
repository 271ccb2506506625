use thiserror::Error;

#[derive(Error, Debug)]
pub enum HalError {
    #[error("Link \"{name}\" not found")]
    LinkNotFound { name: String },

    #[error("Embedded \"{name}\" not found")]
    EmbeddedNotFound { name: String },

    #[error("Embedded \"{name}\" is not a collection or a map")]
    InvalidShape { name: String },

    #[error("Failed to decode embedded \"{name}\": {source}")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode embedded resource: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}

impl HalError {
    /// True for a missing link or embedded resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LinkNotFound { .. } | Self::EmbeddedNotFound { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Mismatch(#[from] serde_json::Error),

    #[error("nesting depth {depth} exceeds limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}
