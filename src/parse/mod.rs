mod literal;
mod span;

use crate::components::Components;
use crate::error::{ErrorKind, ParseError};
use crate::units::Unit;
use literal::Literal;
use nom::character::complete::{anychar, char};
use span::{Parse, RawSpan};

/// Which half of the duration the scanner is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    /// Between `P` and `T`.
    Date,

    /// After the `T` at `offset`, with `items` time items seen so far.
    Time { offset: usize, items: usize },
}

/// Single pass, left-to-right scanner over `["-"] "P" dateItems ["T" timeItems]`.
///
/// Designator order is enforced by comparing every [`Unit`] against the
/// last one accepted, so repeats and reorders are the same rejection.
struct Scanner {
    section: Section,
    last: Option<Unit>,
    items: usize,
    components: Components,
}

fn fail(input: &RawSpan<'_>, kind: ErrorKind) -> ParseError {
    ParseError::new(kind, input.location_offset())
}

fn peek(input: &RawSpan<'_>) -> Option<char> {
    input.fragment().chars().next()
}

impl Scanner {
    fn new() -> Self {
        Self {
            section: Section::Date,
            last: None,
            items: 0,
            components: Components::default(),
        }
    }

    fn run(mut self, input: RawSpan<'_>) -> Result<Components, ParseError> {
        let input = self.sign(input);
        let mut input = Self::marker(input)?;

        while let Some(c) = peek(&input) {
            input = match c {
                'T' => self.separator(input)?,
                '0'..='9' => self.item(input)?,
                '-' => return Err(fail(&input, ErrorKind::MisplacedSign)),
                '.' => return Err(fail(&input, ErrorKind::InvalidDecimalPoint)),
                'Y' | 'M' | 'D' | 'H' | 'S' => return Err(fail(&input, ErrorKind::MissingNumber)),
                _ => return Err(fail(&input, ErrorKind::TrailingOrLeadingGarbage)),
            };
        }

        self.finish(&input)
    }

    fn sign<'a>(&mut self, input: RawSpan<'a>) -> RawSpan<'a> {
        match char::<_, nom::error::Error<_>>('-')(input) {
            Ok((rest, _)) => {
                self.components.negative = true;
                rest
            }
            Err(_) => input,
        }
    }

    fn marker(input: RawSpan<'_>) -> Result<RawSpan<'_>, ParseError> {
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>('P')(input) {
            return Ok(rest);
        }

        let kind = match peek(&input) {
            Some('-') => ErrorKind::MisplacedSign,
            _ if input.fragment().contains('P') => ErrorKind::TrailingOrLeadingGarbage,
            _ => ErrorKind::MissingMarker,
        };

        Err(fail(&input, kind))
    }

    fn separator<'a>(&mut self, input: RawSpan<'a>) -> Result<RawSpan<'a>, ParseError> {
        if let Section::Time { .. } = self.section {
            return Err(fail(&input, ErrorKind::OutOfOrderDesignator));
        }

        self.section = Section::Time {
            offset: input.location_offset(),
            items: 0,
        };

        let (rest, _) = anychar(input)
            .map_err(|_: nom::Err<nom::error::Error<_>>| fail(&input, ErrorKind::NoComponents))?;

        Ok(rest)
    }

    fn item<'a>(&mut self, input: RawSpan<'a>) -> Result<RawSpan<'a>, ParseError> {
        let (rest, literal) =
            Literal::parse(input).map_err(|_| fail(&input, ErrorKind::MissingNumber))?;

        if let (Some(""), Some(point)) = (literal.fraction, literal.point_offset()) {
            return Err(ParseError::new(ErrorKind::InvalidDecimalPoint, point));
        }

        let in_time = matches!(self.section, Section::Time { .. });

        let Some(unit) = peek(&rest).and_then(|c| Unit::from_designator(c, in_time)) else {
            let kind = if peek(&rest) == Some('.') {
                ErrorKind::InvalidDecimalPoint
            } else {
                ErrorKind::TrailingOrLeadingGarbage
            };
            return Err(fail(&rest, kind));
        };

        if unit.is_time() && !in_time {
            return Err(fail(&rest, ErrorKind::MissingSeparator));
        }

        if !unit.is_time() && in_time {
            return Err(fail(&rest, ErrorKind::OutOfOrderDesignator));
        }

        if self.last.is_some_and(|last| unit <= last) {
            return Err(fail(&rest, ErrorKind::OutOfOrderDesignator));
        }

        if let Some(point) = literal.point_offset() {
            if unit != Unit::Second {
                return Err(ParseError::new(ErrorKind::InvalidDecimalPoint, point));
            }
        }

        let n = literal.whole().ok_or_else(|| {
            ParseError::new(ErrorKind::NumericOverflow, literal.position.offset)
        })?;

        self.components.set(unit, n);
        if unit == Unit::Second {
            self.components.seconds.nanos = literal.nanos();
        }

        self.last = Some(unit);
        self.items += 1;
        if let Section::Time { items, .. } = &mut self.section {
            *items += 1;
        }

        let (rest, _) = anychar(rest)
            .map_err(|_: nom::Err<nom::error::Error<_>>| fail(&rest, ErrorKind::MissingNumber))?;

        Ok(rest)
    }

    fn finish(self, end: &RawSpan<'_>) -> Result<Components, ParseError> {
        if self.items == 0 {
            return Err(fail(end, ErrorKind::NoComponents));
        }

        if let Section::Time { offset, items: 0 } = self.section {
            return Err(ParseError::new(ErrorKind::MissingSeparator, offset));
        }

        Ok(self.components)
    }
}

/// Validates a duration string and splits it into its components.
///
/// Magnitudes are kept as written: `P0Y20M0D` yields twenty months,
/// not the canonical years/months/days split.
///
/// # Errors
///
/// Returns the first rule the input breaks.
pub fn parse_components(s: &str) -> Result<Components, ParseError> {
    if s.is_empty() {
        return Err(ParseError::new(ErrorKind::EmptyInput, 0));
    }

    Scanner::new().run(RawSpan::new(s))
}
