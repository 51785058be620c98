//! The synthesizer seam.
//!
//! The harness never knows how text becomes phonemes or samples; it only
//! drives a [`Synthesizer`] built fresh for each run by a [`SynthesizerFactory`].

mod tone;
mod types;

pub use tone::{MAX_TEXT_CHARS, ToneFactory, ToneSynthesizer};
pub use types::{PhoneticToken, SynthError, SynthesisParams, SynthesisRequest};

/// A synthesizer instance configured for one run.
///
/// Implementations must be pure functions of their construction parameters
/// and the text they are given.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer: Send {
    /// Convert text to its phonetic symbol sequence.
    fn recite(&self, text: &str) -> Result<Vec<PhoneticToken>, SynthError>;

    /// Render text to unsigned 8-bit audio samples.
    fn render(&self, text: &str) -> Result<Vec<u8>, SynthError>;
}

/// Builds synthesizer instances from tuning parameters.
#[cfg_attr(test, mockall::automock)]
pub trait SynthesizerFactory: Send + Sync {
    fn create(&self, params: &SynthesisParams) -> Result<Box<dyn Synthesizer>, SynthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Trait mocks
    // ===========================================

    #[test]
    fn test_mock_synthesizer_recite() {
        let mut mock = MockSynthesizer::new();

        mock.expect_recite()
            .withf(|text| text == "HI")
            .times(1)
            .returning(|_| Ok(vec![PhoneticToken::symbol("HH"), PhoneticToken::symbol("AY")]));

        let tokens = mock.recite("HI").unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_mock_synthesizer_render_failure() {
        let mut mock = MockSynthesizer::new();

        mock.expect_render()
            .times(1)
            .returning(|_| Err(SynthError::Engine("buffer overflow".to_string())));

        let result = mock.render("HI");
        assert!(matches!(result.unwrap_err(), SynthError::Engine(_)));
    }

    #[test]
    fn test_mock_factory_receives_params() {
        let mut factory = MockSynthesizerFactory::new();

        factory
            .expect_create()
            .withf(|params| params.pitch == 99 && params.sing_mode)
            .times(1)
            .returning(|_| Ok(Box::new(MockSynthesizer::new())));

        let params = SynthesisParams {
            pitch: 99,
            sing_mode: true,
            ..SynthesisParams::default()
        };
        assert!(factory.create(&params).is_ok());
    }

    // ===========================================
    // Built-in factory
    // ===========================================

    #[test]
    fn test_tone_factory_builds_working_synthesizer() {
        let synth = ToneFactory.create(&SynthesisParams::default()).unwrap();

        let tokens = synth.recite("FC ").unwrap();
        let samples = synth.render("FC ").unwrap();

        assert!(!tokens.is_empty());
        assert!(!samples.is_empty());
    }

    #[test]
    fn test_phonetic_flag_does_not_change_output() {
        let plain = ToneFactory.create(&SynthesisParams::default()).unwrap();
        let phonetic = ToneFactory
            .create(&SynthesisParams {
                phonetic: true,
                ..SynthesisParams::default()
            })
            .unwrap();

        assert_eq!(plain.recite("DOG").unwrap(), phonetic.recite("DOG").unwrap());
        assert_eq!(plain.render("DOG").unwrap(), phonetic.render("DOG").unwrap());
    }
}
