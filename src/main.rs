use algo_drills::utils::{logger, validation::Validate};
use algo_drills::{CliConfig, DrillEngine, LocalStorage, ProblemDrill};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting algo-drills CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 建立練習
    let spec = match config.drill_spec() {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let storage = LocalStorage::new(config.output_path.clone());
    let drill = ProblemDrill::new(storage, spec, config.seed, config.output_path.clone());

    // 建立引擎並執行
    let engine = DrillEngine::new_with_monitoring(drill, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Drill completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Drill completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Drill failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                algo_drills::utils::error::ErrorSeverity::Low => 0,
                algo_drills::utils::error::ErrorSeverity::Medium => 2,
                algo_drills::utils::error::ErrorSeverity::High => 1,
                algo_drills::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
