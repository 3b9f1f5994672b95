use crate::utils::error::Result;

/// Something that can read text aloud.
///
/// `speak` returns once playback has finished.
pub trait Speaker {
    fn speak(&mut self, text: &str) -> Result<()>;
}
