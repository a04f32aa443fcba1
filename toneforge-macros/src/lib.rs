use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Resolves a pitch name to a `Note` at compile time.
///
/// The string is parsed while compiling and the macro expands to a
/// `Note` literal holding the equal-tempered frequency, so nothing is
/// parsed at run time.
///
/// # Format
///
/// `<letter>[#|b][octave]`
/// - `letter` is one of C, D, E, F, G, A, B (case-insensitive)
/// - `octave` defaults to 4 and must lie in -1..=9
///
/// # Examples
///
/// ```ignore
/// use toneforge::note;
///
/// let a4 = note!("A4");
/// let kick = note!("B0");
/// let bflat = note!("Bb3");
/// ```
#[proc_macro]
pub fn note(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    match pitch_hz(&input.value()) {
        Ok(hz) => TokenStream::from(quote! {
            ::toneforge::music::core::Note { pitch: #hz }
        }),
        Err(e) => compile_failure(&input, &e),
    }
}

/// Resolves a pitch name straight to a `Frequency` at compile time.
///
/// Same format as [`note!`]. The frequency is validated against the
/// unbounded band, which every equal-tempered pitch satisfies.
///
/// ```ignore
/// use toneforge::frequency;
///
/// let a4 = frequency!("A4");
/// assert_eq!(a4.hz(), 440.0);
/// ```
#[proc_macro]
pub fn frequency(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    match pitch_hz(&input.value()) {
        Ok(hz) => TokenStream::from(quote! {
            ::toneforge::music::frequency::Frequency::from(
                ::toneforge::music::core::Note { pitch: #hz }
            )
        }),
        Err(e) => compile_failure(&input, &e),
    }
}

/// Reports `reason` at the literal's span.
fn compile_failure(input: &LitStr, reason: &str) -> TokenStream {
    let message = format!("invalid pitch name '{}': {}", input.value(), reason);
    let error: proc_macro2::TokenStream = syn::Error::new(input.span(), message).to_compile_error();
    TokenStream::from(error)
}

fn semitone(name: &str) -> Result<i32, String> {
    let semitone = match name.to_uppercase().as_str() {
        "C" | "B#" => 0,
        "C#" | "DB" => 1,
        "D" => 2,
        "D#" | "EB" => 3,
        "E" | "FB" => 4,
        "F" | "E#" => 5,
        "F#" | "GB" => 6,
        "G" => 7,
        "G#" | "AB" => 8,
        "A" => 9,
        "A#" | "BB" => 10,
        "B" | "CB" => 11,
        other => return Err(format!("unknown pitch letter '{}'", other)),
    };
    Ok(semitone)
}

fn split_octave(s: &str) -> Result<(&str, i32), String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    match s.find(|c: char| c.is_ascii_digit() || c == '-') {
        Some(0) => Err("pitch letter missing".to_string()),
        Some(pos) => {
            let octave: i32 = s[pos..]
                .parse()
                .map_err(|_| format!("invalid octave '{}'", &s[pos..]))?;
            if !(-1..=9).contains(&octave) {
                return Err(format!("octave {} out of range (-1 to 9)", octave));
            }
            Ok((&s[..pos], octave))
        }
        None => Ok((s, 4)),
    }
}

fn pitch_hz(s: &str) -> Result<f64, String> {
    let (name, octave) = split_octave(s)?;
    let key = (octave + 1) * 12 + semitone(name)?;
    Ok(440.0 * 2.0_f64.powf(f64::from(key - 69) / 12.0))
}
