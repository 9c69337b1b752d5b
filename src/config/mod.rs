#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::{OutputFormat, TomlConfig};
#[cfg(feature = "cli")]
use crate::domain::model::{QuantityDomain, ResolutionMode};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "unit-query")]
#[command(about = "Convert free-text unit queries such as '10 ft in cm'")]
pub struct CliConfig {
    /// Query words, e.g. `10 feet to cm` (use `--` before a negative amount)
    pub query: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read one query per line from a file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long, value_enum)]
    pub mode: Option<ResolutionMode>,

    /// Ordered domain allow-list, e.g. `length,mass`
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<QuantityDomain>,

    /// Culture tag used to parse the amount, e.g. `de-DE`
    #[arg(long)]
    pub locale: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long)]
    pub precision: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(mode) = self.mode {
            config.resolver.mode = mode;
        }
        if !self.domains.is_empty() {
            config.resolver.domains = Some(self.domains.clone());
        }
        if let Some(locale) = &self.locale {
            config.locale.culture = Some(locale.clone());
            config.locale.decimal_separator = None;
            config.locale.group_separator = None;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
    }

    pub fn inline_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_inline_query() {
        let cli = CliConfig::parse_from(["unit-query", "10", "ft", "in", "cm"]);
        assert_eq!(cli.inline_query().as_deref(), Some("10 ft in cm"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags_after_query_words_are_still_flags() {
        let cli = CliConfig::parse_from(["unit-query", "10", "ft", "in", "cm", "--verbose"]);
        assert_eq!(cli.inline_query().as_deref(), Some("10 ft in cm"));
        assert!(cli.verbose);

        let cli = CliConfig::parse_from(["unit-query", "10", "ft", "--mode", "single", "in", "cm"]);
        assert_eq!(cli.inline_query().as_deref(), Some("10 ft in cm"));
        assert_eq!(cli.mode, Some(ResolutionMode::Single));
    }

    #[test]
    fn test_negative_amount_is_not_a_flag() {
        let cli = CliConfig::parse_from(["unit-query", "--", "-40", "C", "in", "F"]);
        assert_eq!(cli.inline_query().as_deref(), Some("-40 C in F"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let cli = CliConfig::parse_from([
            "unit-query",
            "--mode",
            "single",
            "--domains",
            "mass,volume",
            "--locale",
            "de-DE",
            "--format",
            "csv",
            "--precision",
            "3",
        ]);

        let mut config = TomlConfig::from_toml_str(
            "[resolver]\nmode = \"multi\"\n[locale]\ndecimal_separator = \".\"\n",
        )
        .unwrap();
        cli.apply_overrides(&mut config);

        assert_eq!(config.resolution_mode(), ResolutionMode::Single);
        assert_eq!(
            config.quantity_domains(),
            vec![QuantityDomain::Mass, QuantityDomain::Volume]
        );
        assert_eq!(config.number_format().decimal_separator, ',');
        assert_eq!(config.output_format(), OutputFormat::Csv);
        assert_eq!(config.precision(), 3);
    }
}
