use crate::domain::model::{Profile, SummaryStats};
use crate::utils::error::Result;
use std::fmt;
use std::sync::OnceLock;

const RULE: &str = "---------------------------------------------------------";

static DEFAULT_BYLINE: OnceLock<Byline> = OnceLock::new();

/// The rendered banner. Immutable once composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Byline {
    text: String,
}

impl Byline {
    pub fn compose(profile: &Profile) -> Result<Self> {
        let stats = SummaryStats::from_sample(&profile.employee_salaries)?;
        tracing::debug!(?stats, "Computed salary statistics");

        Ok(Self {
            text: render(profile, &stats),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Byline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Byline for the built-in profile, computed on first call and reused afterwards.
pub fn default_byline() -> Result<&'static Byline> {
    if let Some(byline) = DEFAULT_BYLINE.get() {
        return Ok(byline);
    }

    let composed = Byline::compose(&Profile::default())?;
    Ok(DEFAULT_BYLINE.get_or_init(|| composed))
}

pub fn get_byline() -> Result<&'static str> {
    default_byline().map(Byline::as_str)
}

fn render(profile: &Profile, stats: &SummaryStats) -> String {
    format!(
        "
{rule}
{company} -- {tagline}
{rule}
Is profitable:  {profitable}
Number of Clients:         {clients}
Services Offered:             {services:?}
Average Client Review Rating: {rating}
Minimum Employee Salary: {min}
Maximum Employee Salary: {max}
Mean Employee Salary: {mean:.2}
Standard Deviation of Employee Salaries: {std_dev:.2}
",
        rule = RULE,
        company = profile.company_name,
        tagline = profile.tagline,
        profitable = profile.is_profitable,
        clients = profile.number_of_clients,
        services = profile.services_offered,
        rating = profile.average_client_review_rating,
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        std_dev = stats.std_dev,
    )
}
