use crate::config::{RunConfig, PIN_LENGTHS};
use crate::utils::error::{PinError, Result};
use crate::utils::validation::{validate_count, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional on-disk configuration. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub counts: Option<CountsConfig>,
    pub output: Option<OutputConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountsConfig {
    pub four: Option<i64>,
    pub six: Option<i64>,
    pub eight: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| PinError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Counts in `PIN_LENGTHS` order; `None` where the file is silent.
    pub fn counts(&self) -> [Option<i64>; 3] {
        match &self.counts {
            Some(c) => [c.four, c.six, c.eight],
            None => [None; 3],
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    /// The file's values laid over the built-in defaults.
    pub fn to_run_config(&self) -> RunConfig {
        let defaults = RunConfig::default();
        let [four, six, eight] = self.counts();

        RunConfig {
            count4: four.unwrap_or(defaults.count4),
            count6: six.unwrap_or(defaults.count6),
            count8: eight.unwrap_or(defaults.count8),
            output_path: self
                .output_path()
                .map(str::to_string)
                .unwrap_or(defaults.output_path),
            monitor: self.monitoring_enabled(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        for (length, count) in PIN_LENGTHS.iter().zip(self.counts()) {
            if let Some(count) = count {
                validate_count(*length, count)?;
            }
        }

        Ok(())
    }
}

/// 替換環境變數 (例如 ${PIN_OUTPUT}); unset variables are left untouched.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PinError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}
