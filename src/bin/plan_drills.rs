use algo_drills::config::plan::PlanConfig;
use algo_drills::core::suite::DrillSuite;
use algo_drills::utils::monitor::SystemMonitor;
use algo_drills::utils::{logger, validation::Validate};
use algo_drills::{ConfigProvider, LocalStorage, ProblemDrill, Storage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "plan-drills")]
#[command(about = "Drill runner with TOML practice-plan support")]
struct Args {
    /// Path to the TOML plan file
    #[arg(short, long, default_value = "drill-plan.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from the plan
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show the execution plan without running anything
    #[arg(long)]
    dry_run: bool,

    /// Execute only specific drills (comma-separated)
    #[arg(long)]
    only: Option<String>,

    /// Skip specific drills (comma-separated)
    #[arg(long)]
    skip: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting plan-based drill runner");
    tracing::info!("📁 Loading plan from: {}", args.config);

    // 載入 TOML 計畫
    let config = match PlanConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load plan file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證計畫
    if let Err(e) = config.validate() {
        tracing::error!("❌ Plan validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Plan loaded and validated successfully");

    display_plan_summary(&config);

    let only: Option<Vec<String>> = args
        .only
        .as_deref()
        .map(|names| names.split(',').map(|n| n.trim().to_string()).collect());
    let skip: Option<Vec<String>> = args
        .skip
        .as_deref()
        .map(|names| names.split(',').map(|n| n.trim().to_string()).collect());

    let selected: Vec<_> = config
        .drill_specs()?
        .into_iter()
        .filter(|spec| {
            only.as_ref().map(|o| o.contains(&spec.name)).unwrap_or(true)
                && !skip.as_ref().map(|s| s.contains(&spec.name)).unwrap_or(false)
        })
        .collect();

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No drill will be executed");
        for spec in &selected {
            println!(
                "  - {} ({}; {} variants)",
                spec.name,
                spec.problem,
                if spec.variants.is_empty() {
                    "all".to_string()
                } else {
                    spec.variants.len().to_string()
                }
            );
        }
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }
    let monitor = SystemMonitor::new(monitor_enabled);

    // 組裝練習套餐
    let output_path = config.output_path().to_string();
    let mut suite = DrillSuite::new(config.plan.name.clone());
    for spec in selected {
        let storage = LocalStorage::new(output_path.clone());
        suite.add_drill(Box::new(ProblemDrill::new(
            storage,
            spec,
            config.seed(),
            output_path.clone(),
        )));
    }

    if suite.is_empty() {
        tracing::warn!("⚠️  Nothing to run after --only/--skip filtering");
        return Ok(());
    }

    match suite.execute_all().await {
        Ok(results) => {
            monitor.log_final_stats();

            let summary = DrillSuite::execution_summary(&results);
            let summary_storage = LocalStorage::new(output_path.clone());
            summary_storage
                .write_file("suite_summary.json", &serde_json::to_vec_pretty(&summary)?)
                .await?;

            println!("✅ Suite completed: {} drills", results.len());
            for result in &results {
                println!("  📁 {} -> {}", result.drill_name, result.output_path);
            }
            println!("📊 Summary saved to: {}/suite_summary.json", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Suite failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_plan_summary(config: &PlanConfig) {
    tracing::info!("📋 Plan: {} (v{})", config.plan.name, config.plan.version);
    tracing::info!("📝 {}", config.plan.description);
    tracing::info!("📁 Output path: {}", config.output_path());
    tracing::info!(
        "🎯 Drills: {} defined, {} enabled",
        config.drills.len(),
        config.enabled_drills().count()
    );
}
