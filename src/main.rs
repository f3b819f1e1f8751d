use clap::Parser;
use pingen::utils::{logger, validation::Validate};
use pingen::{CliConfig, LocalStorage, PinEngine, PinError, RunConfig, TomlConfig};

const RULES: &str = "\
Program rules
-------------
1) Generates only numeric PINs in three lengths: 4, 6, and 8 digits.
2) Each PIN is unique within its length group for a single run.
3) Randomness is derived from SHA3-512 hashing of 64 cryptographically
   secure random bytes, avoiding simple sequential patterns.
4) Output is written to a text file, grouped by PIN length with headers.
   Lengths with a count of 0 are left out.
5) You can customize how many PINs to create per length and the output
   file location using command-line options or a TOML file (--config).
   Command-line options take precedence over the file.";

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.info {
        println!("{}", RULES);
        return Ok(());
    }

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pingen");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    if config.monitor {
        tracing::info!("🔍 Resource monitoring enabled");
    }

    let storage = LocalStorage::default();
    let monitor_enabled = config.monitor;
    let mut engine = PinEngine::new_with_monitoring(storage, config, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ PIN generation completed");
            println!(
                "Generated PINs with complex randomization and saved to {}",
                output_path
            );
            Ok(())
        }
        Err(e) => fail(e),
    }
}

/// 載入並驗證配置: flags > config file > defaults
fn load_config(cli: &CliConfig) -> pingen::Result<RunConfig> {
    let file = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    let config = cli.resolve(file.as_ref());
    config.validate()?;
    Ok(config)
}

fn fail(e: PinError) -> ! {
    tracing::error!(
        "❌ PIN generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
