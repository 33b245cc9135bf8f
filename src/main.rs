use clap::Parser;
use endpoints_docgen::core::ConfigProvider;
use endpoints_docgen::utils::{logger, validation::Validate};
use endpoints_docgen::{CliConfig, DocgenError, EndpointsPipeline, EtlEngine, LocalStorage};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting endpoints-docgen");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Generation failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), DocgenError> {
    // 載入並驗證配置
    let config = cli.resolve()?;
    config.validate()?;

    tracing::info!("📥 Source: {}", config.source_path());
    if !cli.dry_run {
        tracing::info!("📤 Target: {}", config.target_path());
    }
    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(&cli.root);
    let pipeline = EndpointsPipeline::new(storage, config).dry_run(cli.dry_run);

    let output_path = EtlEngine::new_with_monitoring(pipeline, cli.monitor).run()?;
    tracing::info!("✅ Endpoint list generated: {}", output_path);

    Ok(())
}
