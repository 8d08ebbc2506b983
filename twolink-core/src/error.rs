use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    /// Link length is not a positive finite number.
    InvalidLength(&'static str, f64),
    /// Configuration value out of range.
    InvalidValue(&'static str),
    /// Configuration file could not be read.
    Io(io::Error),
    /// Configuration file could not be parsed.
    Config(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength(name, value) => {
                write!(f, "{} must be a positive length, got {}", name, value)
            }
            Error::InvalidValue(reason) => write!(f, "invalid configuration: {}", reason),
            Error::Io(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value)
    }
}
