use serde::Deserialize;

/// Static facts about the business that the byline advertises.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub company_name: String,
    pub tagline: String,
    pub is_profitable: bool,
    pub number_of_clients: u32,
    pub average_client_review_rating: f64,
    pub services_offered: Vec<String>,
    pub employee_salaries: Vec<f64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            company_name: "AnaLITics".to_string(),
            tagline: "Shining a Light on Your Data".to_string(),
            is_profitable: true,
            number_of_clients: 50,
            average_client_review_rating: 4.9,
            services_offered: vec![
                "Data Mining".to_string(),
                "Web Scraping".to_string(),
                "Data Analytics".to_string(),
            ],
            employee_salaries: vec![250000.0, 120000.0, 90000.0, 110000.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (N - 1 divisor).
    pub std_dev: f64,
}
