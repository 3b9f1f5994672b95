use crate::core::byline::Byline;
use crate::domain::ports::Speaker;
use crate::utils::error::Result;
use std::io::Write;

pub struct ScriptRunner<'a> {
    byline: &'a Byline,
    speaker: Option<Box<dyn Speaker + 'a>>,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(byline: &'a Byline) -> Self {
        Self {
            byline,
            speaker: None,
        }
    }

    pub fn with_speaker(byline: &'a Byline, speaker: Box<dyn Speaker + 'a>) -> Self {
        Self {
            byline,
            speaker: Some(speaker),
        }
    }

    /// Prints the byline to `out`, bracketed by START/END log records.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        tracing::info!(byline = %self.byline, "START main() in byline");

        writeln!(out, "{}", self.byline)?;
        out.flush()?;

        if let Some(speaker) = self.speaker.as_mut() {
            tracing::debug!("Reading byline aloud");
            speaker.speak(self.byline.as_str())?;
        }

        tracing::info!("END main() in byline");
        Ok(())
    }
}
