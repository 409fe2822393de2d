use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if this error signals a "produce next" call on a
    /// cursor that had no remaining elements.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind(), ErrorKind::Exhausted { .. })
    }

    pub fn exhausted(cursor: impl Into<String>) -> Error {
        Error(
            ErrorKind::Exhausted {
                cursor: cursor.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_removal(cursor: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedRemoval {
                cursor: cursor.into(),
            }
            .into(),
        )
    }

    pub fn illegal_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::IllegalState {
                message: message.into(),
            }
            .into(),
        )
    }

    /// Wraps an error raised by a caller-supplied transformation.
    ///
    /// The source is carried as-is and can be recovered through
    /// [`ErrorKind::Callback`].
    pub fn callback<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Callback {
                context: context.into(),
                source: Box::new(source),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("no more elements in '{cursor}'")]
    Exhausted { cursor: String },

    #[error("'{cursor}' does not support removal")]
    UnsupportedRemoval { cursor: String },

    #[error("illegal cursor state: {message}")]
    IllegalState { message: String },

    #[error("callback failed: {context}")]
    Callback {
        context: String,
        #[source]
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_kind() {
        let e = Error::exhausted("RangeCursor");
        assert!(e.is_exhausted());
        assert_eq!(e.to_string(), "no more elements in 'RangeCursor'");
    }

    #[test]
    fn test_callback_keeps_source() {
        let io = std::io::Error::other("disk on fire");
        let e = Error::callback("map", io);
        assert!(!e.is_exhausted());
        match e.into_kind() {
            ErrorKind::Callback { context, source } => {
                assert_eq!(context, "map");
                assert_eq!(source.to_string(), "disk on fire");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
