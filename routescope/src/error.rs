use std::fmt;

/// Error type carried through handlers and extractors.
///
/// Holds an HTTP status plus a human-readable message. Converted into a
/// JSON error response by `IntoResponse`.
#[derive(Debug)]
pub struct Error {
    pub status: u16,
    pub message: String,
}

impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: 404,
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            status: 422,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: msg.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(Error::bad_request("x").status, 400);
        assert_eq!(Error::not_found("x").status, 404);
        assert_eq!(Error::validation("x").status, 422);
        assert_eq!(Error::internal("x").status, 500);
    }

    #[test]
    fn test_display_is_message() {
        let err = Error::not_found("no such route");
        assert_eq!(err.to_string(), "no such route");
    }
}
