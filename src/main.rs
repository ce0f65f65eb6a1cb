//! Market Intel - terminal client for market intelligence research reports
//!
//! This is the binary entry point. The interactive client lives in
//! `mintel-tui`; this file parses flags, loads settings and picks a mode.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use mintel_app::config::{self, Settings};
use mintel_client::AnalysisClient;
use mintel_core::prelude::*;
use mintel_core::AnalysisType;

/// Market Intel - AI-powered competitive analysis and due diligence
#[derive(Parser, Debug)]
#[command(name = "mintel", version)]
#[command(about = "Terminal client for market intelligence research reports", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run a single analysis without the TUI, printing NDJSON events
    #[arg(long, requires_all = ["analysis_type", "company"])]
    headless: bool,

    /// Analysis type for headless mode, e.g. due_diligence
    #[arg(long = "type", value_name = "TYPE", requires = "headless")]
    analysis_type: Option<AnalysisType>,

    /// Company, merchant or sector to analyze in headless mode
    #[arg(long, value_name = "NAME", requires = "headless")]
    company: Option<String>,

    /// Directory for the exported report (overrides the config file)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Query the backend health endpoint and exit
    #[arg(long, conflicts_with_all = ["headless", "init_config"])]
    check: bool,

    /// Write a default config file and exit
    #[arg(long, conflicts_with = "headless")]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let args = Args::parse();

    mintel_core::logging::init()?;

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("Could not determine a config directory; pass --config <PATH>");
            std::process::exit(1);
        };
        let written = config::init_config_file(&path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        if written {
            println!("Wrote default config to {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let settings = apply_overrides(
        config_path
            .as_deref()
            .map(config::load_settings)
            .unwrap_or_default(),
        &args,
    );

    let client = AnalysisClient::new(&settings.server.base_url, settings.server.timeout())?;

    if args.check {
        if !check(&client).await {
            std::process::exit(1);
        }
        return Ok(());
    }

    if args.headless {
        if let (Some(analysis_type), Some(company)) = (args.analysis_type, args.company.as_deref())
        {
            let ok = headless::runner::run_headless(&client, &settings, analysis_type, company).await;
            if !ok {
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    mintel_tui::run(settings, client).await
}

/// CLI flags take precedence over the config file
fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(server) = &args.server {
        settings.server.base_url = server.clone();
    }
    if let Some(output) = &args.output {
        settings.export.directory = output.clone();
    }
    settings
}

/// Print the backend health probe. Returns whether the backend is healthy.
async fn check(client: &AnalysisClient) -> bool {
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    println!("Server: {}", client.base_url());
    match client.health().await {
        Ok(health) => {
            println!("Status: {}", health.status);
            println!("API configured: {}", yes_no(health.api_configured));
            println!("Search configured: {}", yes_no(health.search_configured));
            health.is_healthy()
        }
        Err(e) => {
            warn!("Health check failed: {}", e);
            eprintln!("Health check failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_interactive_defaults() {
        let args = Args::try_parse_from(["mintel"]).unwrap();
        assert!(!args.headless);
        assert!(!args.check);
        assert!(args.server.is_none());
    }

    #[test]
    fn test_args_headless() {
        let args = Args::try_parse_from([
            "mintel",
            "--headless",
            "--type",
            "bnpl_merchant_risk",
            "--company",
            "Acme Corp",
            "--output",
            "reports",
        ])
        .unwrap();
        assert!(args.headless);
        assert_eq!(args.analysis_type, Some(AnalysisType::BnplMerchantRisk));
        assert_eq!(args.company.as_deref(), Some("Acme Corp"));
        assert_eq!(args.output, Some(PathBuf::from("reports")));
    }

    #[test]
    fn test_args_headless_requires_type_and_company() {
        assert!(Args::try_parse_from(["mintel", "--headless"]).is_err());
        assert!(Args::try_parse_from(["mintel", "--headless", "--company", "Acme"]).is_err());
        assert!(Args::try_parse_from(["mintel", "--type", "competition"]).is_err());
    }

    #[test]
    fn test_args_reject_unknown_type() {
        let result = Args::try_parse_from([
            "mintel",
            "--headless",
            "--type",
            "astrology",
            "--company",
            "Acme",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let args = Args::try_parse_from([
            "mintel",
            "--server",
            "http://research.internal:9000",
            "--output",
            "/tmp/reports",
        ])
        .unwrap();
        let settings = apply_overrides(Settings::default(), &args);
        assert_eq!(settings.server.base_url, "http://research.internal:9000");
        assert_eq!(settings.export.directory, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let args = Args::try_parse_from(["mintel"]).unwrap();
        let settings = apply_overrides(Settings::default(), &args);
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn test_check_reports_health() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status": "healthy", "api_configured": true, "search_configured": false}"#)
            .create_async()
            .await;
        let client = AnalysisClient::new(&server.url(), None).unwrap();
        assert!(check(&client).await);
    }

    #[tokio::test]
    async fn test_check_fails_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(503)
            .create_async()
            .await;
        let client = AnalysisClient::new(&server.url(), None).unwrap();
        assert!(!check(&client).await);
    }
}
