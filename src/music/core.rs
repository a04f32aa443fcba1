use std::str::FromStr;

use thiserror::Error;

/// Error type for parsing pitch names such as `"A4"` or `"Bb3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty
    #[error("input string is empty")]
    Empty,
    /// The pitch letter was invalid or unrecognized
    #[error("invalid pitch name: '{0}'")]
    InvalidPitch(String),
    /// The octave was invalid or out of range
    #[error("invalid octave: '{0}'")]
    InvalidOctave(String),
}

/// The twelve pitch classes, named by their sharp spelling.
///
/// # Examples
///
/// ```
/// use toneforge::music::core::{Note, Pitch};
///
/// let middle_c = Note::from_pitch(Pitch::C, 4);
/// assert!((middle_c.pitch - 261.63).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// Chromatic order, starting from C.
    pub const CHROMATIC: [Pitch; 12] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::DSharp,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
        Pitch::A,
        Pitch::ASharp,
        Pitch::B,
    ];

    /// Semitones above C, 0 to 11.
    ///
    /// ```
    /// use toneforge::music::core::Pitch;
    ///
    /// assert_eq!(Pitch::C.semitone_offset(), 0);
    /// assert_eq!(Pitch::A.semitone_offset(), 9);
    /// ```
    pub fn semitone_offset(&self) -> i32 {
        *self as i32
    }

    /// Pitch class `semitones` above C, wrapping around the octave.
    pub fn from_semitones(semitones: i32) -> Self {
        Self::CHROMATIC[semitones.rem_euclid(12) as usize]
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    /// Parses a letter A to G (any case) followed by an optional `#` or `b`.
    ///
    /// Accidentals wrap within the octave: `Cb` is `B`, `B#` is `C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPitch(s.to_string());
        let mut chars = s.chars();
        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(invalid()),
        };
        let accidental = match chars.as_str() {
            "" => 0,
            "#" => 1,
            "b" | "B" => -1,
            _ => return Err(invalid()),
        };
        Ok(Self::from_semitones(natural + accidental))
    }
}

/// A named pitch resolved to its equal-tempered frequency (A4 = 440 Hz).
///
/// Convert it into a [`Frequency`](super::frequency::Frequency) to drive a sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// The frequency of the note in Hz
    pub pitch: f64,
}

impl Note {
    /// Tuning reference: A4 in Hz.
    pub const A4_HZ: f64 = 440.0;

    /// Creates a note from a pitch class and octave (-1 to 9).
    ///
    /// ```
    /// use toneforge::music::core::{Note, Pitch};
    ///
    /// let note = Note::from_pitch(Pitch::A, 4);
    /// assert_eq!(note.pitch, 440.0);
    /// ```
    pub fn from_pitch(pitch: Pitch, octave: i8) -> Self {
        // Semitones above C-1, the same numbering A4 = 69 uses
        let key = (i32::from(octave) + 1) * 12 + pitch.semitone_offset();
        Self {
            pitch: Self::A4_HZ * 2.0_f64.powf(f64::from(key - 69) / 12.0),
        }
    }
}

impl FromStr for Note {
    type Err = ParseError;

    /// Parses `<pitch>[octave]`; the octave defaults to 4.
    ///
    /// ```
    /// use toneforge::music::core::Note;
    ///
    /// let note: Note = "C4".parse().unwrap();
    /// assert!((note.pitch - 261.63).abs() < 0.01);
    ///
    /// let note: Note = "Bb3".parse().unwrap();
    /// assert!((note.pitch - 233.08).abs() < 0.01);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let (pitch_str, octave) = match s.find(|c: char| c.is_ascii_digit() || c == '-') {
            Some(0) => return Err(ParseError::InvalidPitch(String::new())),
            Some(pos) => {
                let octave_str = &s[pos..];
                let octave = octave_str
                    .parse::<i8>()
                    .map_err(|_| ParseError::InvalidOctave(octave_str.to_string()))?;
                if !(-1..=9).contains(&octave) {
                    return Err(ParseError::InvalidOctave(octave_str.to_string()));
                }
                (&s[..pos], octave)
            }
            None => (s, 4),
        };

        Ok(Self::from_pitch(pitch_str.parse()?, octave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pitch() {
        assert!((Note::from_pitch(Pitch::A, 4).pitch - 440.0).abs() < 1e-9);
        assert!((Note::from_pitch(Pitch::A, 3).pitch - 220.0).abs() < 1e-9);
        assert!((Note::from_pitch(Pitch::C, 5).pitch - 523.25).abs() < 0.01);
    }

    #[test]
    fn test_parse_pitch() {
        assert_eq!("c#".parse::<Pitch>(), Ok(Pitch::CSharp));
        assert_eq!("Db".parse::<Pitch>(), Ok(Pitch::CSharp));
        let pitch = |name: &str| name.parse::<Pitch>();
        assert_eq!(pitch("H"), Err(ParseError::InvalidPitch("H".into())));
        assert_eq!(pitch("C##"), Err(ParseError::InvalidPitch("C##".into())));
    }

    #[test]
    fn test_accidentals_wrap() {
        assert_eq!("Cb".parse::<Pitch>(), Ok(Pitch::B));
        assert_eq!("B#".parse::<Pitch>(), Ok(Pitch::C));
        assert_eq!("E#".parse::<Pitch>(), Ok(Pitch::F));
        assert_eq!(Pitch::from_semitones(-1), Pitch::B);
        for (i, pitch) in Pitch::CHROMATIC.iter().enumerate() {
            assert_eq!(pitch.semitone_offset(), i as i32);
        }
    }

    #[test]
    fn test_parse_note() {
        let note: Note = "A4".parse().unwrap();
        assert!((note.pitch - 440.0).abs() < 1e-9);

        let note: Note = "A".parse().unwrap();
        assert!((note.pitch - 440.0).abs() < 1e-9);

        let note: Note = "C-1".parse().unwrap();
        assert!((note.pitch - 8.18).abs() < 0.01);
    }

    #[test]
    fn test_parse_errors() {
        let note = |name: &str| name.parse::<Note>();
        assert_eq!(note(""), Err(ParseError::Empty));
        assert!(matches!(note("4"), Err(ParseError::InvalidPitch(_))));
        assert!(matches!(note("C10"), Err(ParseError::InvalidOctave(_))));
        assert!(matches!(note("C4x"), Err(ParseError::InvalidOctave(_))));
        assert!(matches!(note("X4"), Err(ParseError::InvalidPitch(_))));
    }
}
