use anyhow::Context;
use byline::adapters::speech;
use byline::utils::{logger, validation::Validate};
use byline::{default_byline, Byline, CliConfig, Profile, ScriptRunner};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    config.validate().context("Invalid command line")?;

    // 初始化日誌
    logger::init_cli_logger(&config.log_config())
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let composed;
    let byline: &Byline = match &config.profile {
        Some(path) => {
            tracing::debug!("Loading profile from: {}", path.display());
            let profile = Profile::from_file(path)
                .with_context(|| format!("Failed to load profile '{}'", path.display()))?;
            profile.validate().context("Invalid profile")?;

            composed = Byline::compose(&profile).context("Failed to compose byline")?;
            &composed
        }
        None => default_byline().context("Failed to compose byline")?,
    };

    let mut runner = if config.speak {
        let speaker = speech::system_speaker().context("Failed to start speech engine")?;
        ScriptRunner::with_speaker(byline, speaker)
    } else {
        ScriptRunner::new(byline)
    };

    let stdout = std::io::stdout();
    runner
        .run(&mut stdout.lock())
        .context("Failed to run byline")?;

    Ok(())
}
