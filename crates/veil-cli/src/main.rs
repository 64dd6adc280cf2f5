mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use veil_analyze::Analyzer;
use veil_api::{api_router, ApiState};
use veil_core::{AnalysisOptions, PoisonRequest};
use veil_db::VeilDb;

#[derive(Parser)]
#[command(name = "veil")]
#[command(about = "Audit websites for tracking artifacts and poison the trackers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short = 'f', long, default_value = "veil.toml", help = "Path to config file")]
        config: String,
    },
    /// Analyze one URL and print the report
    Analyze {
        #[arg(help = "URL to inspect for tracking artifacts")]
        url: String,
        #[arg(long, help = "Fetch the page instead of analyzing offline")]
        scrape: bool,
    },
    /// Generate poisoned tracking values locally
    Poison {
        url: String,
        domain: String,
        #[arg(short, long, help = "Cookie names to poison (defaults to common trackers)")]
        target: Vec<String>,
        #[arg(long, default_value = "aggressive")]
        level: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "veil=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config: config_path } => run_serve(config_path).await,
        Commands::Analyze { url, scrape } => run_analyze(url, scrape).await,
        Commands::Poison {
            url,
            domain,
            target,
            level,
        } => run_poison(url, domain, target, level),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run_serve(config_path: String) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::VeilConfig::load_or_default(&config_path)?;

    if let Some(parent) = std::path::Path::new(&cfg.db.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = VeilDb::open(&cfg.db.path)?;
    let analyzer = Analyzer::with_fetch_settings(
        Duration::from_secs(cfg.fetch.timeout_secs),
        &cfg.fetch.user_agent,
    )?;
    let state = Arc::new(ApiState { db, analyzer });

    let addr = format!("{}:{}", cfg.server.bind, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    println!("veil api listening on {}", addr);
    println!("endpoints:");
    println!("  GET  /api/         - liveness message");
    println!("  POST /api/analyze  - analyze a URL for tracking artifacts");
    println!("  POST /api/poison   - generate poisoned tracking values");
    println!("  POST /api/status   - record a status check");
    println!("  GET  /api/status   - list status checks");

    axum::serve(listener, api_router(state)).await?;

    Ok(())
}

async fn run_analyze(url: String, scrape: bool) -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = Analyzer::new()?;
    let options = AnalysisOptions {
        include_web_scraping: scrape,
        ..AnalysisOptions::default()
    };

    println!("analyzing {} for tracking artifacts...", url);
    let report = analyzer.analyze(&url, &options).await?;

    println!("\n--- analysis for {} ---", report.url);
    println!("domain: {}", report.domain);
    println!("data source: {}", report.data_source);
    println!(
        "threat: {} - {}",
        report.threat_level.as_str(),
        report.threat_description
    );
    println!("fingerprinting score: {}", report.fingerprinting_score);
    println!("keyword: {}", report.poetic_keyword);

    println!("\ncookies ({}):", report.cookie_count);
    for cookie in &report.cookies {
        println!("  [{}] {} ({})", cookie.kind, cookie.name, cookie.expiry);
    }

    println!("\nfingerprinting techniques:");
    for method in &report.fingerprinting {
        let marker = if method.detected { "!" } else { "-" };
        println!("  [{}] {}: {}", marker, method.technique, method.description);
    }

    if !report.third_parties.is_empty() {
        println!("\nthird parties:");
        for party in &report.third_parties {
            println!(
                "  {} ({}, {} requests)",
                party.domain, party.category, party.requests
            );
        }
    }

    let impact = &report.environmental_impact;
    println!(
        "\nimpact: {} / {} / {}",
        impact.carbon_footprint, impact.data_transfer, impact.energy_used
    );

    Ok(())
}

fn run_poison(
    url: String,
    domain: String,
    target: Vec<String>,
    level: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = PoisonRequest {
        url,
        domain,
        poison_level: level,
        target_cookies: target,
    };

    let report = veil_poison::poison(&request);

    println!("{}", report.message);
    println!("\npoisoned cookies ({}):", report.poisoned_cookies.len());
    for cookie in &report.poisoned_cookies {
        println!(
            "  {} = {} ({})",
            cookie.name, cookie.poisoned_value, cookie.technique
        );
    }

    println!("\nfingerprint obfuscations:");
    for obfuscation in &report.fingerprint_obfuscations {
        println!(
            "  [{}] {}: {}",
            obfuscation.resistance_level, obfuscation.technique, obfuscation.obfuscated_data
        );
    }

    println!("\nkeywords: {}", report.disruption_keywords.join(", "));
    println!(
        "impact: {} in {}",
        report.environmental_impact.carbon_footprint, report.environmental_impact.processing_time
    );

    Ok(())
}
