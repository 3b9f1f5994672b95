use crate::domain::ports::Speaker;
use crate::utils::error::{BylineError, Result};

#[cfg(feature = "speech")]
use std::time::Duration;

#[cfg(feature = "speech")]
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Platform text-to-speech engine.
#[cfg(feature = "speech")]
pub struct TtsSpeaker {
    engine: tts::Tts,
}

#[cfg(feature = "speech")]
impl TtsSpeaker {
    pub fn new() -> Result<Self> {
        let engine = tts::Tts::default().map_err(speech_error)?;
        Ok(Self { engine })
    }
}

#[cfg(feature = "speech")]
impl Speaker for TtsSpeaker {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.engine.speak(text, false).map_err(speech_error)?;

        // 沒有 is_speaking 的後端無法等待播放結束
        if !self.engine.supported_features().is_speaking {
            tracing::warn!("Speech backend cannot report playback state; not waiting");
            return Ok(());
        }

        while self.engine.is_speaking().map_err(speech_error)? {
            std::thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }
}

#[cfg(feature = "speech")]
fn speech_error(e: tts::Error) -> BylineError {
    BylineError::SpeechError {
        message: e.to_string(),
    }
}

/// Opens the platform speech engine.
#[cfg(feature = "speech")]
pub fn system_speaker() -> Result<Box<dyn Speaker>> {
    Ok(Box::new(TtsSpeaker::new()?))
}

#[cfg(not(feature = "speech"))]
pub fn system_speaker() -> Result<Box<dyn Speaker>> {
    Err(BylineError::SpeechError {
        message: "built without the `speech` feature".to_string(),
    })
}
