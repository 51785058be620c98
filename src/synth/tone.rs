//! Built-in deterministic tone synthesizer.
//!
//! A minimal stand-in engine so the harness binaries run without linking an
//! external synthesizer. Letters map to fixed symbols; vowels render as a square
//! wave, consonants as LFSR noise, pauses and punctuation as silence.

use std::iter;

use super::types::{PhoneticToken, SynthError, SynthesisParams};
use super::{Synthesizer, SynthesizerFactory};

/// Sample value for silence (midpoint of the unsigned 8-bit range).
const SILENCE: u8 = 128;

/// Samples emitted per token for each unit of `speed`.
const SAMPLES_PER_SPEED_UNIT: usize = 16;

const LFSR_SEED: u16 = 0xACE1;

/// Longest text accepted, in characters. Bounds a render to
/// `MAX_TEXT_CHARS * 255 * 16` samples.
pub const MAX_TEXT_CHARS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Voicing {
    Silent,
    Voiced,
    Unvoiced,
}

fn classify(character: char) -> Option<(&'static str, Voicing)> {
    use Voicing::*;

    let entry = match character {
        'A' => ("AA", Voiced),
        'B' => ("B", Unvoiced),
        'C' => ("K", Unvoiced),
        'D' => ("D", Unvoiced),
        'E' => ("EH", Voiced),
        'F' => ("F", Unvoiced),
        'G' => ("G", Unvoiced),
        'H' => ("HH", Unvoiced),
        'I' => ("IH", Voiced),
        'J' => ("JH", Unvoiced),
        'K' => ("K", Unvoiced),
        'L' => ("L", Voiced),
        'M' => ("M", Voiced),
        'N' => ("N", Voiced),
        'O' => ("OW", Voiced),
        'P' => ("P", Unvoiced),
        'Q' => ("K", Unvoiced),
        'R' => ("R", Voiced),
        'S' => ("S", Unvoiced),
        'T' => ("T", Unvoiced),
        'U' => ("UH", Voiced),
        'V' => ("V", Unvoiced),
        'W' => ("W", Voiced),
        'X' => ("KS", Unvoiced),
        'Y' => ("Y", Voiced),
        'Z' => ("Z", Unvoiced),
        ' ' => (" ", Silent),
        '.' => (".", Silent),
        ',' => (",", Silent),
        '?' => ("?", Silent),
        '!' => ("!", Silent),
        '-' => ("-", Silent),
        '\'' => ("'", Silent),
        _ => return None,
    };

    Some(entry)
}

/// 16-bit Galois LFSR used for consonant noise.
struct Lfsr(u16);

impl Lfsr {
    fn next_bit(&mut self) -> bool {
        let bit = self.0 & 1 == 1;
        self.0 >>= 1;
        if bit {
            self.0 ^= 0xB400;
        }
        bit
    }
}

/// Deterministic square-wave/noise synthesizer.
#[derive(Debug, Clone)]
pub struct ToneSynthesizer {
    params: SynthesisParams,
}

impl ToneSynthesizer {
    /// Create a synthesizer, rejecting a zero pitch or speed.
    pub fn new(params: SynthesisParams) -> Result<Self, SynthError> {
        if params.pitch == 0 {
            return Err(SynthError::InvalidParameter(
                "pitch must be greater than 0".to_string(),
            ));
        }

        if params.speed == 0 {
            return Err(SynthError::InvalidParameter(
                "speed must be greater than 0".to_string(),
            ));
        }

        Ok(Self { params })
    }

    fn tokenize(text: &str) -> Result<Vec<(&'static str, Voicing)>, SynthError> {
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(SynthError::InvalidParameter(format!(
                "text is {len} characters, limit is {MAX_TEXT_CHARS}"
            )));
        }

        text.chars()
            .enumerate()
            .map(|(index, character)| {
                classify(character.to_ascii_uppercase())
                    .ok_or(SynthError::UnsupportedCharacter(character, index))
            })
            .collect()
    }

    fn frame_len(&self) -> usize {
        self.params.speed as usize * SAMPLES_PER_SPEED_UNIT
    }

    fn half_period(&self, token_index: usize) -> usize {
        let base = (self.params.pitch as usize / 2).max(1);
        if self.params.sing_mode {
            base
        } else {
            // Falling intonation: lengthen the period as the phrase goes on.
            base + token_index % 4
        }
    }
}

impl Synthesizer for ToneSynthesizer {
    fn recite(&self, text: &str) -> Result<Vec<PhoneticToken>, SynthError> {
        Ok(Self::tokenize(text)?
            .into_iter()
            .map(|(symbol, _)| PhoneticToken::symbol(symbol))
            .collect())
    }

    fn render(&self, text: &str) -> Result<Vec<u8>, SynthError> {
        let tokens = Self::tokenize(text)?;
        let frame_len = self.frame_len();
        let mut samples = Vec::with_capacity(tokens.len() * frame_len);
        let mut lfsr = Lfsr(LFSR_SEED);

        for (index, (_, voicing)) in tokens.iter().enumerate() {
            match voicing {
                Voicing::Silent => {
                    samples.extend(iter::repeat_n(SILENCE, frame_len));
                }
                Voicing::Voiced => {
                    let amplitude = self.params.mouth / 4;
                    let half_period = self.half_period(index);
                    samples.extend((0..frame_len).map(|i| {
                        if (i / half_period) % 2 == 0 {
                            SILENCE + amplitude
                        } else {
                            SILENCE - amplitude
                        }
                    }));
                }
                Voicing::Unvoiced => {
                    let amplitude = self.params.throat / 4;
                    samples.extend((0..frame_len).map(|_| {
                        if lfsr.next_bit() {
                            SILENCE + amplitude
                        } else {
                            SILENCE - amplitude
                        }
                    }));
                }
            }
        }

        Ok(samples)
    }
}

/// Factory producing a fresh [`ToneSynthesizer`] per run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneFactory;

impl SynthesizerFactory for ToneFactory {
    fn create(&self, params: &SynthesisParams) -> Result<Box<dyn Synthesizer>, SynthError> {
        Ok(Box::new(ToneSynthesizer::new(*params)?))
    }
}
