use clap::Parser;
use unit_query::app::output::{self, QueryReport};
use unit_query::utils::error::{ErrorSeverity, UnitQueryError};
use unit_query::utils::{logger, validation::Validate};
use unit_query::{CliConfig, ConfigProvider, QueryEngine, QueryInput, StaticCatalog, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::debug!("CLI args: {:?}", args);

    // 載入 TOML 配置（未指定時使用預設值）
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            })
        }
        None => TomlConfig::default(),
    };

    // 應用命令列覆蓋設定
    args.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let input = QueryInput::from_args(args.inline_query(), args.input.as_deref())
        .unwrap_or_else(|e| exit_with(&e));
    let queries = input.read_queries().unwrap_or_else(|e| exit_with(&e));

    let catalog = StaticCatalog::new();
    let engine = QueryEngine::from_config(&catalog, &config);
    tracing::debug!(
        mode = ?engine.mode(),
        domains = ?engine.domains(),
        "engine ready"
    );

    let mut reports = Vec::with_capacity(queries.len());
    let mut failures = 0usize;

    for query in queries {
        match engine.query(&query) {
            Ok(results) => {
                if results.is_empty() {
                    tracing::info!("No conversion found for '{}'", query);
                }
                reports.push(QueryReport { query, results });
            }
            Err(e) => {
                failures += 1;
                tracing::error!(
                    "❌ Query '{}' failed: {} (Category: {:?})",
                    query,
                    e,
                    e.category()
                );
                eprintln!("❌ {}: {}", query, e.user_friendly_message());
                if !input.is_batch() {
                    eprintln!("💡 {}", e.recovery_suggestion());
                }
            }
        }
    }

    let stdout = std::io::stdout();
    output::render(
        stdout.lock(),
        &reports,
        config.output_format(),
        config.precision(),
        input.is_batch(),
    )?;

    if failures > 0 {
        tracing::warn!("{} quer{} failed", failures, if failures == 1 { "y" } else { "ies" });
        std::process::exit(1);
    }

    Ok(())
}

fn exit_with(e: &UnitQueryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
