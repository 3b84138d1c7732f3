use crate::convert::ConversionError;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a parse.
///
/// The first error aborts the parse. Actions that already ran keep their
/// effects.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `-x` or `--name` that the table does not declare.
    #[error("unknown option {0}")]
    BadOption(String),

    /// A positional token with no positional slot left to take it.
    #[error("unexpected argument '{0}'")]
    UnknownArgument(String),

    #[error("option {0} requires an argument")]
    MissingArg(String),

    /// A flag written as `--name=value`.
    #[error("option {0} does not take an argument")]
    UnwantedArg(String),

    #[error("bad value for {option}: {source}")]
    BadValue {
        option: String,
        #[source]
        source: ConversionError,
    },

    /// Only raised by [`OptionTable::check_required`](crate::OptionTable::check_required).
    #[error("missing required option {0}")]
    MissingRequired(String),

    #[error("argument is not valid unicode: {0}")]
    NotUnicode(String),
}

impl Error {
    /// The conversion failure behind a [`Error::BadValue`].
    pub fn conversion(&self) -> Option<&ConversionError> {
        match self {
            Error::BadValue { source, .. } => Some(source),
            _ => None,
        }
    }
}
