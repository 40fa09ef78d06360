//! Seat codes: `P{floor:02}{LETTER}{row:02}{seat:02}`, e.g. `P01A0101`.

use std::fmt;
use std::str::FromStr;

use super::Stadium;
use crate::error::{Result, SeatingError};
use crate::models::{Seat, SeatAddress, SectionLetter};

pub const SEAT_CODE_LEN: usize = 8;

pub fn encode(address: &SeatAddress) -> String {
    address.to_string()
}

/// `P01A`
pub fn section_code(floor: u32, letter: SectionLetter) -> String {
    format!("P{:02}{}", floor, letter.to_upper())
}

/// `P01A01`
pub fn row_code(floor: u32, letter: SectionLetter, row: u32) -> String {
    format!("{}{:02}", section_code(floor, letter), row)
}

/// Syntactic parse only; whether the seat exists is up to the stadium.
/// The leading character is a marker and is not interpreted.
pub fn parse(code: &str) -> Result<SeatAddress> {
    let len = code.chars().count();
    if len != SEAT_CODE_LEN {
        return Err(SeatingError::InvalidCodeLength(len));
    }
    let format_error = |reason| SeatingError::InvalidCodeFormat {
        code: code.to_string(),
        reason,
    };
    if !code.is_ascii() {
        return Err(format_error("non-ASCII characters"));
    }

    // первый символ не проверяется: адрес задают только позиции 1-7
    let bytes = code.as_bytes();
    let floor = two_digits(&bytes[1..3]).ok_or_else(|| format_error("invalid floor number"))?;
    let section = SectionLetter::try_from(bytes[3] as char)?;
    let row = two_digits(&bytes[4..6]).ok_or_else(|| format_error("invalid row number"))?;
    let seat = two_digits(&bytes[6..8]).ok_or_else(|| format_error("invalid seat number"))?;

    Ok(SeatAddress::new(floor, section, row, seat))
}

fn two_digits(pair: &[u8]) -> Option<u32> {
    match pair {
        [tens, units] if tens.is_ascii_digit() && units.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(units - b'0'))
        }
        _ => None,
    }
}

impl fmt::Display for SeatAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{:02}{}{:02}{:02}",
            self.floor,
            self.section.to_upper(),
            self.row,
            self.seat
        )
    }
}

impl FromStr for SeatAddress {
    type Err = SeatingError;

    fn from_str(code: &str) -> Result<Self> {
        parse(code)
    }
}

impl Stadium {
    /// Decodes `code` and resolves it against this stadium. Syntax errors are
    /// reported as such; a well-formed code that points outside the built
    /// hierarchy is `SeatNotFound`.
    pub fn seat_by_code(&self, code: &str) -> Result<&Seat> {
        let address = parse(code)?;
        self.seat_at(&address)
            .map_err(|_| SeatingError::SeatNotFound(code.to_string()))
    }

    pub(crate) fn seat_by_code_mut(&mut self, code: &str) -> Result<&mut Seat> {
        let address = parse(code)?;
        self.seat_at_mut(&address)
            .map_err(|_| SeatingError::SeatNotFound(code.to_string()))
    }
}
