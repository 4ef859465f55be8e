use crate::error::{Error, ErrorKind, ParseError};
use crate::units::UnitTable;
use crate::{format, parse, ElapsedTime};

/// Encodes and decodes durations against one [`UnitTable`].
///
/// Both directions always share the table, so any value survives
/// `decode(encode(value))` unchanged.
///
/// ```
/// use xsd_duration::Codec;
///
/// let codec = Codec::new();
///
/// let value = codec.decode("PT1M30.5S")?;
/// assert_eq!(90_500_000_000, value);
/// assert_eq!("PT1M30.5S", codec.encode(value));
/// #
/// # Ok::<(), xsd_duration::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    units: UnitTable,
}

impl Codec {
    /// Creates a codec using [`UnitTable::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            units: UnitTable::DEFAULT,
        }
    }

    /// Creates a builder to change the nominal year and month lengths.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// The unit lengths used by this codec.
    #[must_use]
    pub const fn units(&self) -> &UnitTable {
        &self.units
    }

    /// Renders a value as its canonical duration string.
    #[must_use]
    pub fn encode(&self, value: ElapsedTime) -> String {
        format::encode(value, &self.units)
    }

    /// Decodes a duration string.
    ///
    /// Fraction digits past the ninth (below one nanosecond) are truncated.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rule the input breaks.
    pub fn decode(&self, s: &str) -> Result<ElapsedTime, ParseError> {
        let result = parse::parse_components(s).and_then(|components| {
            components
                .total(&self.units)
                .ok_or_else(|| ParseError::new(ErrorKind::NumericOverflow, 0))
        });

        match &result {
            Ok(value) => log::trace!("decoded {s:?} => {value}ns"),
            Err(e) => log::trace!("rejected {s:?}: {e}"),
        }

        result
    }

    /// Decodes a duration from raw bytes, which must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rule the input breaks.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<ElapsedTime, ParseError> {
        let s = std::str::from_utf8(bytes).map_err(|e| {
            ParseError::new(ErrorKind::TrailingOrLeadingGarbage, e.valid_up_to())
        })?;

        self.decode(s)
    }

    /// Decodes a duration into `target`, which is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rule the input breaks.
    pub fn decode_into(&self, s: &str, target: &mut ElapsedTime) -> Result<(), ParseError> {
        *target = self.decode(s)?;
        Ok(())
    }
}

/// Builder for [`Codec`].
pub struct Builder {
    units: UnitTable,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self {
            units: UnitTable::DEFAULT,
        }
    }

    /// Sets the nominal length of a month in nanoseconds.
    ///
    /// Default = 30 days
    #[must_use]
    pub fn month_length(mut self, nanos: u64) -> Self {
        self.units.month = nanos;
        self
    }

    /// Sets the nominal length of a year in nanoseconds.
    ///
    /// Default = 356 days
    #[must_use]
    pub fn year_length(mut self, nanos: u64) -> Self {
        self.units.year = nanos;
        self
    }

    /// Validates the unit lengths and creates the codec.
    ///
    /// # Errors
    ///
    /// Returns error unless a day is shorter than a month, and a month
    /// shorter than a year.
    pub fn build(self) -> crate::Result<Codec> {
        if !self.units.is_valid() {
            log::debug!("rejecting unit table {:?}", self.units);
            return Err(Error::InvalidUnitTable);
        }

        Ok(Codec { units: self.units })
    }
}
