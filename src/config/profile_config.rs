use crate::domain::model::Profile;
use crate::utils::error::{BylineError, Result};
use crate::utils::validation::{
    validate_finite_values, validate_non_empty_string, validate_range, Validate,
};
use regex::Regex;
use std::path::Path;

pub const MAX_REVIEW_RATING: f64 = 5.0;

impl Profile {
    /// 從 TOML 檔案載入設定檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BylineError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${COMPANY_NAME})，未設定的保持原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BylineError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("company_name", &self.company_name)?;
        validate_non_empty_string("tagline", &self.tagline)?;
        validate_range(
            "average_client_review_rating",
            self.average_client_review_rating,
            0.0,
            MAX_REVIEW_RATING,
        )?;
        for service in &self.services_offered {
            validate_non_empty_string("services_offered", service)?;
        }
        validate_finite_values("employee_salaries", &self.employee_salaries)?;

        tracing::debug!("Profile validation passed");
        Ok(())
    }
}
