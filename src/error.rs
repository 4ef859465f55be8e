/// The rule a rejected duration string broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty.
    EmptyInput,

    /// The leading `P` is missing.
    MissingMarker,

    /// A `-` appeared somewhere other than the first character.
    MisplacedSign,

    /// A designator appeared after one it must precede, or twice.
    OutOfOrderDesignator,

    /// A designator was not preceded by any digits.
    MissingNumber,

    /// A decimal point outside the seconds, or one not followed by a digit.
    InvalidDecimalPoint,

    /// Time items without a preceding `T`, or a `T` with no time items.
    MissingSeparator,

    /// The string holds no `<number><designator>` item at all.
    NoComponents,

    /// Characters before the sign or `P`, or after the last item.
    TrailingOrLeadingGarbage,

    /// A number, or the total, does not fit the value range.
    NumericOverflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "empty input",
            Self::MissingMarker => "missing leading 'P'",
            Self::MisplacedSign => "sign must be the first character",
            Self::OutOfOrderDesignator => "designator out of order or repeated",
            Self::MissingNumber => "designator without a number",
            Self::InvalidDecimalPoint => {
                "decimal point is only allowed in seconds and must be followed by a digit"
            }
            Self::MissingSeparator => "'T' must separate date items from time items",
            Self::NoComponents => "at least one number and designator are required",
            Self::TrailingOrLeadingGarbage => "unexpected characters",
            Self::NumericOverflow => "value out of range",
        };
        write!(f, "{msg}")
    }
}

/// A duration string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The rule that was broken.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input where the problem was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid duration at offset {}: {}", self.offset, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Error type
#[derive(Debug)]
pub enum Error {
    /// A duration string could not be decoded.
    Parse(ParseError),

    /// Unit lengths must satisfy `day < month < year`.
    InvalidUnitTable,
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => {
                write!(f, "{e}",)
            }
            Self::InvalidUnitTable => {
                write!(f, "InvalidUnitTable",)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::InvalidUnitTable => None,
        }
    }
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_error_display() {
        let e = ParseError::new(ErrorKind::MissingMarker, 0);
        assert_eq!("invalid duration at offset 0: missing leading 'P'", e.to_string());
    }

    #[test]
    fn error_wraps_parse_error() {
        let e: Error = ParseError::new(ErrorKind::NumericOverflow, 3).into();
        assert!(matches!(e, Error::Parse(p) if p.kind() == ErrorKind::NumericOverflow && p.offset() == 3));
        assert!(std::error::Error::source(&e).is_some());
    }
}
