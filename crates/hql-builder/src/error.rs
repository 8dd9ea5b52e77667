//! Error types for hql-builder.

use thiserror::Error;

/// Result type alias for builder operations.
pub type HqlResult<T> = Result<T, HqlError>;

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for query composition and session handoff.
#[derive(Debug, Error)]
pub enum HqlError {
    /// A named placeholder ran past the values supplied for the call.
    #[error("missing value for parameter '{name}' in fragment '{fragment}'")]
    MissingValue { name: String, fragment: String },

    /// A bare `:` placeholder found without a value to name it.
    #[error("no value for anonymous placeholder at offset {offset} in fragment '{fragment}'")]
    UnnamedWithoutValue { offset: usize, fragment: String },

    /// The session rejected the accumulated query text.
    #[error("failed to create query")]
    CreateQuery { source: BoxedError },

    /// The session rejected a bound parameter value.
    #[error("error setting parameter {name}={value}")]
    Bind {
        name: String,
        value: String,
        source: BoxedError,
    },
}

impl HqlError {
    /// Wrap a session error raised while preparing the query.
    pub fn create_query<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CreateQuery {
            source: Box::new(source),
        }
    }

    /// Wrap a session error raised while binding `name`.
    pub fn bind<E>(name: impl Into<String>, value: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Bind {
            name: name.into(),
            value: value.into(),
            source: Box::new(source),
        }
    }

    /// Check if this is a composition error (fixable at the call site).
    pub fn is_composition(&self) -> bool {
        matches!(
            self,
            Self::MissingValue { .. } | Self::UnnamedWithoutValue { .. }
        )
    }
}
