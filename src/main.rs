use clap::Parser;
use product_export::utils::{logger, validation::Validate};
use product_export::core::summary;
use product_export::{CliConfig, EtlEngine, ExportConfig, LocalStorage, ProductPipeline};

fn main() {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting product-export");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

fn run(cli: &CliConfig) -> product_export::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            ExportConfig::from_file(path)?
        }
        None => ExportConfig::default(),
    };
    config.apply_cli_overrides(cli);
    config.validate()?;

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = ProductPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new_with_monitoring(pipeline, cli.monitor);

    let report = engine.run_with(|records| summary::write_overview(&mut std::io::stdout(), records))?;
    summary::write_outputs(&mut std::io::stdout(), &report.outputs, report.record_count())
}
