//! Board constants and the fixed letter tables.

/// Columns on the board, and tiles per column when fully topped up.
pub const GRID_SIZE: usize = 8;

/// Game time per match, in milliseconds.
pub const MATCH_DURATION_MS: u64 = 180_000;

/// Default period of the background time-decay sweep, in milliseconds.
pub const SWEEP_INTERVAL_MS: u64 = 1_000;

/// Draw pool for the letter stream: one byte per draw out of 98, mirroring
/// the physical tile distribution (E appears 12 times, Q once, and so on).
pub const LETTER_POOL: &str = concat!(
    "AAAAAAAAA",
    "BB",
    "CC",
    "DDDD",
    "EEEEEEEEEEEE",
    "FF",
    "GGG",
    "HH",
    "IIIIIIIII",
    "J",
    "K",
    "LLLL",
    "MM",
    "NNNNNN",
    "OOOOOOOO",
    "PP",
    "Q",
    "RRRRRR",
    "SSSS",
    "TTTTTT",
    "UUUU",
    "VV",
    "WW",
    "X",
    "YY",
    "Z",
);

/// Point value of a letter. Rare letters are worth more; the value is fixed
/// per letter and independent of the draw weights.
pub fn letter_value(letter: char) -> u8 {
    match letter {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}
