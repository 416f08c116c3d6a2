//! One-byte chromatic note encoding.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Printed names of the twelve chromas, naturals suffixed with `-`.
const CHROMA_NAMES: [&str; 12] = [
    "C-", "C#", "D-", "D#", "E-", "F-", "F#", "G-", "G#", "A-", "A#", "B-",
];

/// Chroma offsets of the note letters `A` through `G`.
const LETTER_CHROMAS: [i32; 7] = [9, 11, 0, 2, 4, 5, 7];

const DEFAULT_OCTAVE: i32 = 4;

/// Highest pitched note: `B-9`.
const MAX_PITCHED: u8 = 119;

/// A musical note packed in a single byte.
///
/// Bytes `0..=119` hold `octave * 12 + chroma` with chroma 0 = C up to
/// 11 = B. Three bytes are reserved as commands: [`Note::RELEASE`] (253),
/// [`Note::STOP`] (254) and [`Note::NULL`] (255). Any other byte prints as
/// the null placeholder `---`.
///
/// ```
/// use whimsy_core::Note;
///
/// let note: Note = "C#3".parse().unwrap();
/// assert_eq!(note.value(), 37);
/// assert_eq!(note.to_string(), "C#3");
/// assert_eq!(Note::parse("eb").to_string(), "D#4");
/// assert!(Note::parse("H-4").is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note(u8);

impl Note {
    pub const NULL: Note = Note(255);
    pub const STOP: Note = Note(254);
    pub const RELEASE: Note = Note(253);

    /// Builds a pitched note from a chroma (0 = C) and an octave. A chroma
    /// above 11 or a pitch beyond B-9 gives [`Note::NULL`].
    pub const fn new(chroma: u8, octave: u8) -> Self {
        let pitch = chroma as u16 + octave as u16 * 12;
        if chroma > 11 || pitch > 119 {
            Self::NULL
        } else {
            Note(pitch as u8)
        }
    }

    pub const fn from_byte(byte: u8) -> Self {
        Note(byte)
    }

    /// Raw byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }

    pub const fn is_stop(self) -> bool {
        self.0 == Self::STOP.0
    }

    pub const fn is_release(self) -> bool {
        self.0 == Self::RELEASE.0
    }

    pub const fn is_pitched(self) -> bool {
        self.0 <= MAX_PITCHED
    }

    /// Chroma of a pitched note, 0 = C through 11 = B.
    pub fn chroma(self) -> Option<u8> {
        self.is_pitched().then_some(self.0 % 12)
    }

    pub fn octave(self) -> Option<u8> {
        self.is_pitched().then_some(self.0 / 12)
    }

    /// Parses `[A-Ga-g][#bB-]?[0-9]?` or one of the command tokens `xxx`,
    /// `===` and `---`.
    ///
    /// `#` raises the letter by a semitone, `b`/`B` lowers it and `-` keeps
    /// it natural. The octave defaults to 4. Anything else, including a
    /// pitch that falls outside `C-0..=B-9`, yields [`Note::NULL`].
    pub fn parse(text: &str) -> Note {
        match text {
            "xxx" => return Note::STOP,
            "===" => return Note::RELEASE,
            "---" => return Note::NULL,
            _ => {}
        }

        let bytes = text.as_bytes();
        let Some((&letter, mut rest)) = bytes.split_first() else {
            return Note::NULL;
        };
        let mut chroma = match letter {
            b'A'..=b'G' => LETTER_CHROMAS[(letter - b'A') as usize],
            b'a'..=b'g' => LETTER_CHROMAS[(letter - b'a') as usize],
            _ => return Note::NULL,
        };

        if let Some((&accidental, tail)) = rest.split_first() {
            let shift = match accidental {
                b'#' => Some(1),
                b'b' | b'B' => Some(-1),
                b'-' => Some(0),
                _ => None,
            };
            if let Some(shift) = shift {
                chroma += shift;
                rest = tail;
            }
        }

        let octave = match rest {
            [] => DEFAULT_OCTAVE,
            [digit @ b'0'..=b'9'] => i32::from(digit - b'0'),
            _ => return Note::NULL,
        };

        let byte = chroma + octave * 12;
        if (0..=i32::from(MAX_PITCHED)).contains(&byte) {
            Note(byte as u8)
        } else {
            Note::NULL
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Note::NULL
    }
}

impl From<u8> for Note {
    fn from(byte: u8) -> Self {
        Note(byte)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> Self {
        note.0
    }
}

impl FromStr for Note {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Note::parse(s))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0..=MAX_PITCHED => write!(
                f,
                "{}{}",
                CHROMA_NAMES[(self.0 % 12) as usize],
                self.0 / 12
            ),
            253 => f.write_str("==="),
            254 => f.write_str("xxx"),
            _ => f.write_str("---"),
        }
    }
}
