use crate::content::key::ContentKey;

/// Failures of one fetch attempt. The resolver folds every one of them into
/// [`FunnelError::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("could not load {url}: {message}")]
    Network { url: String, message: String },
    #[error("could not load {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} did not contain a brief: {message}")]
    Decode { url: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunnelError {
    #[error("no option selected")]
    NoSelection,
    #[error("content \"{key}\" not found: {cause}")]
    NotFound { key: ContentKey, cause: String },
    #[error("content \"{key}\" has no title")]
    MalformedRecord { key: ContentKey },
}

impl FunnelError {
    pub fn not_found(key: &ContentKey, cause: impl Into<String>) -> Self {
        FunnelError::NotFound {
            key: key.clone(),
            cause: cause.into(),
        }
    }

    /// Short diagnostic for the in-page error card.
    pub fn diagnostic(&self) -> String {
        match self {
            FunnelError::NoSelection => "No option was selected.".to_string(),
            FunnelError::NotFound { cause, .. } => cause.clone(),
            FunnelError::MalformedRecord { .. } => "The brief is missing its title.".to_string(),
        }
    }
}

/// Leaves the underlying cause of a failure in the developer console.
#[cfg(target_arch = "wasm32")]
pub fn report(key: &ContentKey, err: &FunnelError) {
    gloo_console::error!(format!("content {} unavailable: {}", key, err));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn report(key: &ContentKey, err: &FunnelError) {
    log::error!("content {} unavailable: {}", key, err);
}
