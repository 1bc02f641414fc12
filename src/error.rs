// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Item data could not be parsed into rail items.
    Items(String),
    /// A rail needs at least one item to have a valid active index.
    EmptyRail,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Items(e) => write!(f, "Items Error: {}", e),
            Error::EmptyRail => write!(f, "Rail Error: at least one item is required"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk unavailable".into());
        assert_eq!(format!("{}", err), "I/O Error: disk unavailable");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn empty_rail_mentions_item_requirement() {
        assert!(Error::EmptyRail.to_string().contains("at least one item"));
    }

    #[test]
    fn from_io_error_maps_to_io_variant() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        match err {
            Error::Io(message) => assert!(message.contains("missing")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_maps_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml")
            .expect_err("invalid toml should fail");
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
