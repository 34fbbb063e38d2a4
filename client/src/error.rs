use std::error::Error as StdError;

use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync>;

/// Uniform wrapper around a failed backend call.
///
/// `msg` is display-ready text chosen at the call site ("Could not submit
/// application"); the original failure is stored unmodified and kept opaque
/// so callers can narrow it themselves later, e.g. to a [`reqwest::Error`]
/// to read the status code. Constructing one has no side effect: nothing is
/// logged, nothing is rethrown.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct ApiError {
    msg: String,
    source: Option<BoxedCause>,
}

impl ApiError {
    /// Wraps a failure value together with a display message.
    pub fn wrap(error: impl Into<BoxedCause>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: Some(error.into()),
        }
    }

    /// An error with a message but no underlying cause.
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            source: None,
        }
    }

    /// The display message supplied at the call site.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The original failure value, if one was wrapped.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Narrows the wrapped failure to a concrete error type.
    pub fn downcast_cause<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_ref().and_then(|cause| cause.downcast_ref::<E>())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::fmt;

    use super::ApiError;

    #[derive(Debug, PartialEq, Eq)]
    struct NetworkDown(&'static str);

    impl fmt::Display for NetworkDown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for NetworkDown {}

    #[test]
    fn test_wrap_keeps_message_and_cause() {
        let err = ApiError::wrap(NetworkDown("network down"), "Could not load candidate");

        assert_eq!(err.msg(), "Could not load candidate");
        assert_eq!(
            err.downcast_cause::<NetworkDown>(),
            Some(&NetworkDown("network down"))
        );
    }

    #[test]
    fn test_display_is_the_caller_message() {
        let err = ApiError::wrap(NetworkDown("network down"), "Could not load candidate");

        assert_eq!(err.to_string(), "Could not load candidate");
    }

    #[test]
    fn test_source_exposes_the_original_failure() {
        let err = ApiError::wrap(NetworkDown("network down"), "Could not load candidate");

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "network down");
    }

    #[test]
    fn test_wrap_accepts_any_failure_shape() {
        let from_str = ApiError::wrap("boom", "Could not log in");
        let from_string = ApiError::wrap(String::from("boom"), "Could not log in");

        assert!(from_str.cause().is_some());
        assert!(from_string.cause().is_some());
        assert!(from_str.downcast_cause::<NetworkDown>().is_none());
    }

    #[test]
    fn test_message_has_no_cause() {
        let err = ApiError::message("Could not log out");

        assert_eq!(err.msg(), "Could not log out");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }
}
