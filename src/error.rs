use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    UnknownLocation(String),
    Request(reqwest::Error),
    Http(String),
    Parse(parse::Error),
    Url(url::ParseError),
    Registry(String),
    Config(String),
    /// The task group itself failed, as opposed to one of its sources.
    Aggregate(String),
    Io(std::io::Error),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Url(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLocation(location) => write!(f, "Unknown location: {location}"),
            Error::Request(e) => write!(f, "Request error: {e}"),
            Error::Http(msg) => write!(f, "HTTP error: {msg}"),
            Error::Parse(e) => write!(f, "Parse error: {e}"),
            Error::Url(e) => write!(f, "Url error: {e}"),
            Error::Registry(msg) => write!(f, "Registry error: {msg}"),
            Error::Config(msg) => write!(f, "Config error: {msg}"),
            Error::Aggregate(msg) => write!(f, "Aggregate error: {msg}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn read_stdin_line() -> Result<()> {
        Err::<(), _>(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))?;
        Ok(())
    }

    #[test]
    fn test_io_errors_convert() {
        let err = read_stdin_line().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: stdin closed");
    }
}
