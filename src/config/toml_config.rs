use crate::core::ConfigProvider;
use crate::domain::model::{NumberFormat, QuantityDomain, ResolutionMode, DEFAULT_PRECISION};
use crate::utils::error::{Result, UnitQueryError};
use crate::utils::validation::{
    validate_non_empty_list, validate_range, validate_separator, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub resolver: ResolverConfig,
    pub locale: LocaleConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub mode: ResolutionMode,
    /// 掃描順序；未設定時使用 catalog 的完整清單
    pub domains: Option<Vec<QuantityDomain>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub culture: Option<String>,
    pub decimal_separator: Option<char>,
    pub group_separator: Option<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UnitQueryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UnitQueryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${UNIT_QUERY_LOCALE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UnitQueryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 解析數字格式：culture 預設值，再套用明確指定的分隔符號
    pub fn resolve_number_format(&self) -> Result<NumberFormat> {
        let mut format = match &self.locale.culture {
            Some(culture) => NumberFormat::for_culture(culture).ok_or_else(|| {
                UnitQueryError::UnknownLocale {
                    culture: culture.clone(),
                }
            })?,
            None => NumberFormat::default(),
        };

        if let Some(decimal) = self.locale.decimal_separator {
            format.decimal_separator = decimal;
            // 明確指定小數點但未指定千分位時，避免沿用相同符號
            if self.locale.group_separator.is_none() && format.group_separator == Some(decimal) {
                format.group_separator = None;
            }
        }
        if let Some(group) = self.locale.group_separator {
            format.group_separator = Some(group);
        }

        Ok(format)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(domains) = &self.resolver.domains {
            validate_non_empty_list("resolver.domains", domains)?;
            validate_unique("resolver.domains", domains)?;
        }

        validate_range("output.precision", self.output.precision, 0, 15)?;

        let format = self.resolve_number_format()?;
        validate_separator("locale.decimal_separator", format.decimal_separator)?;
        if let Some(group) = format.group_separator {
            validate_separator("locale.group_separator", group)?;
            if group == format.decimal_separator {
                return Err(UnitQueryError::InvalidConfigValueError {
                    field: "locale.group_separator".to_string(),
                    value: group.to_string(),
                    reason: "Group separator must differ from the decimal separator".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl ConfigProvider for TomlConfig {
    fn resolution_mode(&self) -> ResolutionMode {
        self.resolver.mode
    }

    fn quantity_domains(&self) -> Vec<QuantityDomain> {
        self.resolver.domains.clone().unwrap_or_default()
    }

    fn number_format(&self) -> NumberFormat {
        // validate() 已檢查過 culture，這裡失敗時退回 invariant
        self.resolve_number_format().unwrap_or_default()
    }

    fn precision(&self) -> usize {
        self.output.precision
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
