//! Western zodiac lookup by birth month and day.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// Inclusive upper bound `(month, day)` of each sign, in calendar order.
/// Capricorn appears twice because it straddles the new year.
const BOUNDARIES: [((u32, u32), ZodiacSign); 13] = [
    ((1, 19), ZodiacSign::Capricorn),
    ((2, 18), ZodiacSign::Aquarius),
    ((3, 20), ZodiacSign::Pisces),
    ((4, 19), ZodiacSign::Aries),
    ((5, 20), ZodiacSign::Taurus),
    ((6, 20), ZodiacSign::Gemini),
    ((7, 22), ZodiacSign::Cancer),
    ((8, 22), ZodiacSign::Leo),
    ((9, 22), ZodiacSign::Virgo),
    ((10, 22), ZodiacSign::Libra),
    ((11, 21), ZodiacSign::Scorpio),
    ((12, 21), ZodiacSign::Sagittarius),
    ((12, 31), ZodiacSign::Capricorn),
];

impl ZodiacSign {
    /// Sign for a one-based `month` and `day`.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        BOUNDARIES
            .iter()
            .find(|((end_month, end_day), _)| (month, day) <= (*end_month, *end_day))
            .map(|(_, sign)| *sign)
            .unwrap_or(ZodiacSign::Capricorn)
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
