use super::span::{Parse, ParseResult, Position, RawSpan};
use nom::{
    character::complete::{char, digit0, digit1},
    combinator::opt,
    sequence::preceded,
};
use nom_locate::position;

const FRACTION_DIGITS: u32 = 9;

/// A number in front of a designator: `1*DIGIT ["." *DIGIT]`.
///
/// The fraction is kept even when it has no digits, so that `15.S`
/// can be told apart from `15S`.
#[derive(Debug, Eq, PartialEq)]
pub struct Literal<'a> {
    pub digits: &'a str,
    pub fraction: Option<&'a str>,
    pub position: Position,
}

impl<'a> Literal<'a> {
    /// Integer part, or `None` if it does not fit 64 bits.
    pub fn whole(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Fraction as nanoseconds; digits past the ninth are truncated.
    pub fn nanos(&self) -> u32 {
        let Some(fraction) = self.fraction else {
            return 0;
        };

        let mut nanos = 0;
        let mut scale = FRACTION_DIGITS;

        for b in fraction.bytes().take(FRACTION_DIGITS as usize) {
            nanos = nanos * 10 + u32::from(b - b'0');
            scale -= 1;
        }

        nanos * 10_u32.pow(scale)
    }

    /// Offset of the decimal point, if any.
    pub fn point_offset(&self) -> Option<usize> {
        self.fraction
            .map(|_| self.position.offset + self.digits.len())
    }
}

impl<'a> Parse<'a> for Literal<'a> {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, pos) = position(input)?;

        let (input, digits) = digit1(input)?;
        let (input, fraction) = opt(preceded(char('.'), digit0))(input)?;

        Ok((
            input,
            Self {
                digits: *digits.fragment(),
                fraction: fraction.map(|f| *f.fragment()),
                position: pos.into(),
            },
        ))
    }
}
