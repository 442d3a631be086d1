//! CLI administration tool for newsedge.
//!
//! Provides commands for inspecting the tenant registry and probing the
//! upstream content tiers without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List all registered tenants
//! cargo run --bin admin -- tenants list
//!
//! # Resolve a hostname the way the server would
//! cargo run --bin admin -- tenants resolve news.example.com
//!
//! # Validate a registry file before deploying it
//! cargo run --bin admin -- tenants check tenants.json
//!
//! # Probe the article fallback chain
//! cargo run --bin admin -- fetch article ab124bdc1534
//!
//! # Fetch the grouped news listing
//! cargo run --bin admin -- fetch listing
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; all optional. `TENANTS_FILE` switches the registry,
//! `NEWS_API_BASE` / `BACKUP_BASE_URL` pick the upstream endpoints.

use newsedge::application::services::TenantService;
use newsedge::config::{self, Config};
use newsedge::domain::entities::TenantRegistry;
use newsedge::domain::sources::ContentSource;
use newsedge::infrastructure::upstream::HttpContentSource;
use newsedge::utils::article_id::is_valid_article_id;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::time::Duration;

/// CLI tool for operating newsedge.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect the tenant registry
    Tenants {
        #[command(subcommand)]
        action: TenantAction,
    },

    /// Probe the upstream content tiers
    Fetch {
        #[command(subcommand)]
        action: FetchAction,
    },
}

/// Tenant registry subcommands.
#[derive(Subcommand)]
enum TenantAction {
    /// List all registered hostnames
    List,

    /// Resolve a hostname the way the server would
    Resolve {
        /// Hostname to resolve, port included if the registry key has one
        hostname: String,
    },

    /// Validate a registry file before deploying it
    Check {
        /// Path to a tenant registry JSON file
        file: PathBuf,
    },
}

/// Upstream probing subcommands.
#[derive(Subcommand)]
enum FetchAction {
    /// Fetch an article through the fallback chain
    Article {
        /// 12-character article id
        id: String,
    },

    /// Fetch the grouped news listing
    Listing,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Tenants { action } => handle_tenant_action(action, &config)?,
        Commands::Fetch { action } => handle_fetch_action(action, &config).await?,
    }

    Ok(())
}

/// Loads the registry the same way the server does.
fn load_registry(config: &Config) -> Result<TenantRegistry> {
    match &config.tenants_file {
        Some(path) => TenantRegistry::from_path(path),
        None => Ok(TenantRegistry::builtin()),
    }
}

/// Dispatches tenant registry commands.
fn handle_tenant_action(action: TenantAction, config: &Config) -> Result<()> {
    match action {
        TenantAction::List => list_tenants(config),
        TenantAction::Resolve { hostname } => resolve_tenant(config, &hostname),
        TenantAction::Check { file } => check_registry_file(&file),
    }
}

/// Lists registered hostnames with their site names.
///
/// # Output Format
///
/// ```text
/// 📋 Registered Tenants
///
///   Hostname                            Site name
///   ─────────────────────────────────────────────────────────
///   topnews.daily24.blog                Top News Daily
/// ```
fn list_tenants(config: &Config) -> Result<()> {
    println!("{}", "📋 Registered Tenants".bright_blue().bold());
    println!();

    let registry = load_registry(config)?;

    let mut hostnames: Vec<&str> = registry.hostnames().collect();
    hostnames.sort_unstable();

    if hostnames.is_empty() {
        println!("{}", "  No tenants registered".yellow());
        println!("  Unknown hostnames are still served with generated defaults");
        return Ok(());
    }

    println!(
        "  {:<36} {}",
        "Hostname".bright_white().bold(),
        "Site name".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for hostname in &hostnames {
        let site_name = registry
            .merged(hostname)
            .map(|config| config.site_name)
            .unwrap_or_default();

        println!("  {:<36} {}", hostname.cyan(), site_name);
    }

    println!();
    println!(
        "  Total: {}",
        hostnames.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Resolves one hostname and prints the full merged configuration.
fn resolve_tenant(config: &Config, hostname: &str) -> Result<()> {
    println!("{} {}", "🔍 Resolving".bright_blue().bold(), hostname.cyan());
    println!();

    let service = TenantService::new(load_registry(config)?);

    let status = if service.is_registered(hostname) {
        "registered".green()
    } else {
        "generated (not registered)".yellow()
    };

    let tenant = service.resolve(hostname);

    println!("  Status:       {status}");
    println!("  Site name:    {}", tenant.site_name.bright_white().bold());
    println!("  Analytics:    {}", or_none(&tenant.analytics_tag_id));
    println!(
        "  Display ads:  client {}, slots {} / {}",
        or_none(&tenant.ads.display_client_id),
        or_none(&tenant.ads.display_slot_primary),
        or_none(&tenant.ads.display_slot_secondary)
    );
    println!(
        "  Native ads:   widget {}, feed {}",
        or_none(&tenant.ads.native_widget_id),
        or_none(&tenant.ads.native_feed_id)
    );
    println!("  AdsKeeper:    {}", or_none(&tenant.ads.keeper_src));
    println!("  Video:        {}", or_none(&tenant.ads.video_script));
    println!("  Display JS:   {}", or_none(&tenant.ads.display_script));

    if !tenant.custom_scripts.is_empty() {
        println!("  Custom:       {} bytes of script", tenant.custom_scripts.len());
    }

    println!();
    Ok(())
}

/// Parses a registry file and reports what it contains.
fn check_registry_file(file: &PathBuf) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Checking registry file".bright_blue().bold(),
        file.display().to_string().cyan()
    );
    println!();

    match TenantRegistry::from_path(file) {
        Ok(registry) => {
            println!("{}", "✅ Registry file is valid".green().bold());
            println!();
            println!(
                "  Tenants:           {}",
                registry.len().to_string().bright_white().bold()
            );
            println!(
                "  Default site name: {}",
                registry.defaults_config().site_name
            );
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ Registry file is invalid".red().bold());
            println!();
            Err(e)
        }
    }
}

/// Dispatches upstream probing commands.
async fn handle_fetch_action(action: FetchAction, config: &Config) -> Result<()> {
    let source = HttpContentSource::new(
        &config.news_api_base,
        &config.backup_base_url,
        Duration::from_millis(config.upstream_timeout_ms),
    )?;

    match action {
        FetchAction::Article { id } => probe_article(&source, &id).await,
        FetchAction::Listing => probe_listing(&source).await,
    }
}

/// Walks the article tiers in server order and prints which one answered.
async fn probe_article(source: &HttpContentSource, id: &str) -> Result<()> {
    if !is_valid_article_id(id) {
        anyhow::bail!("'{id}' is not a valid article id (12 lowercase hex characters)");
    }

    println!("{}", "🌐 Probing primary tier...".bright_blue());

    match source.fetch_article(id).await {
        Ok(articles) if !articles.is_empty() => {
            println!(
                "{} ({} article{})",
                "✅ Primary tier answered".green().bold(),
                articles.len(),
                if articles.len() == 1 { "" } else { "s" }
            );
            println!();
            for article in &articles {
                print_article(article.id.as_str(), &article.title, &article.published_at);
            }
            println!();
            return Ok(());
        }
        Ok(_) => println!("{}", "⚠️  Primary tier has no such article".yellow()),
        Err(e) => println!("{} {}", "⚠️  Primary tier failed:".yellow(), e),
    }

    println!("{}", "🔄 Probing backup tier...".bright_blue());

    match source.fetch_backup_article(id).await {
        Ok(article) => {
            println!("{}", "✅ Backup tier answered".green().bold());
            println!();
            print_article(article.id.as_str(), &article.title, &article.published_at);
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "❌ Backup tier failed:".red().bold(), e);
            anyhow::bail!("Article {id} is unreachable on every tier")
        }
    }
}

/// Fetches and summarizes the grouped listing.
async fn probe_listing(source: &HttpContentSource) -> Result<()> {
    println!("{}", "🌐 Fetching news listing...".bright_blue());
    println!();

    let groups = source.fetch_listing().await?;

    if groups.is_empty() {
        println!("{}", "  Listing is empty".yellow());
        return Ok(());
    }

    println!(
        "  {:<36} {}",
        "Group".bright_white().bold(),
        "Articles".bright_white().bold()
    );
    println!("  {}", "─".repeat(48).bright_black());

    let mut total = 0;
    for group in &groups {
        total += group.articles.len();
        println!(
            "  {:<36} {}",
            group.name.cyan(),
            group.articles.len().to_string().bright_white()
        );
    }

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_article(id: &str, title: &str, published_at: &str) {
    println!("  {} {}", id.bright_black(), title.bright_white());
    if !published_at.is_empty() {
        println!("  {:<12} {}", "", published_at.bright_black());
    }
}

/// Shows a placeholder for unset configuration fields.
fn or_none(value: &str) -> ColoredString {
    if value.is_empty() {
        "(none)".bright_black()
    } else {
        value.cyan()
    }
}
