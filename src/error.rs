use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    MalformedQuantity{text: String} = "malformed quantity '{text}'",
    MalformedCoordinate{text: String} = "malformed coordinate '{text}'",
    MalformedRecord{reason: String} = "malformed record: {reason}"
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Io,
    MalformedQuantity,
    MalformedCoordinate,
    MalformedRecord,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::MalformedQuantity { .. } => ErrorKind::MalformedQuantity,
            Error::MalformedCoordinate { .. } => ErrorKind::MalformedCoordinate,
            Error::MalformedRecord { .. } => ErrorKind::MalformedRecord,
        }
    }

    pub(crate) fn quantity(text: &str) -> Error {
        Error::MalformedQuantity { text: text.to_owned() }
    }

    pub(crate) fn coordinate(text: &str) -> Error {
        Error::MalformedCoordinate { text: text.to_owned() }
    }

    pub(crate) fn record<S: Into<String>>(reason: S) -> Error {
        Error::MalformedRecord { reason: reason.into() }
    }
}
