use thiserror::Error;

use backoffice_auth::AuthzError;
use backoffice_client::ApiError;
use backoffice_store::StorageError;

use crate::config::ConfigError;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("unknown resource '{0}'")]
    UnknownResource(String),
}
