//! Command line interface for the static build.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use screenapi_landing::content::PLANS;
use screenapi_landing::{BillingPeriod, PriceDisplay, SiteConfig, SiteError, render_site, validate_site};

#[derive(Parser, Debug)]
#[command(name = "screenapi-landing")]
#[command(about = "Build and inspect the ScreenAPI landing page")]
#[command(version)]
struct Cli {
    /// Site config (TOML). Built-in defaults when omitted
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the landing page into a static site directory
    Build {
        /// Output directory
        #[arg(long, short, default_value = "dist")]
        out: PathBuf,
        /// Static asset tree copied into the output (e.g. ./public)
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Validate plans, testimonials and navigation
    Check,
    /// Print every plan's price for a billing period
    Pricing {
        #[arg(long, default_value_t = BillingPeriod::Monthly)]
        billing: BillingPeriod,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PlanPrice {
    plan: &'static str,
    billing: BillingPeriod,
    #[serde(flatten)]
    display: PriceDisplay,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[screenapi-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn execute(cli: Cli) -> Result<()> {
    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Build { out, assets } => build(&config, &out, assets.as_deref()),
        Command::Check => {
            validate_site(&config)?;
            println!(
                "ok: {} plans, {} nav links",
                PLANS.len(),
                config.nav.len()
            );
            Ok(())
        }
        Command::Pricing { billing, json } => print_pricing(billing, json),
    }
}

fn build(config: &SiteConfig, out: &Path, assets: Option<&Path>) -> Result<()> {
    validate_site(config).context("site content is invalid")?;
    if let Some(assets) = assets {
        ensure_disjoint(assets, out)?;
    }

    fs::create_dir_all(out).map_err(|source| SiteError::Write {
        path: out.to_path_buf(),
        source,
    })?;

    let html = render_site(config);
    let index = out.join("index.html");
    fs::write(&index, html).map_err(|source| SiteError::Write {
        path: index.clone(),
        source,
    })?;
    info!(path = %index.display(), "wrote page");

    if let Some(assets) = assets {
        let copied = copy_assets(assets, out)
            .with_context(|| format!("copying assets from {}", assets.display()))?;
        info!(files = copied, from = %assets.display(), "copied static assets");
    }

    println!("{}", index.display());
    Ok(())
}

/// Refuse asset trees that contain, or live inside, the output directory.
fn ensure_disjoint(assets: &Path, out: &Path) -> Result<(), SiteError> {
    let resolved_assets = resolve(assets).map_err(|source| SiteError::Read {
        path: assets.to_path_buf(),
        source,
    })?;
    let resolved_out = resolve(out).map_err(|source| SiteError::Read {
        path: out.to_path_buf(),
        source,
    })?;

    if resolved_assets.starts_with(&resolved_out) || resolved_out.starts_with(&resolved_assets) {
        return Err(SiteError::AssetsOverlap {
            assets: assets.to_path_buf(),
            out: out.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonical form of a path that may not exist yet: the deepest existing
/// ancestor is canonicalized and the missing tail appended.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(base) => return Ok(missing.iter().rev().fold(base, |acc, name| acc.join(name))),
            Err(err) => match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name.to_os_string());
                    existing = if parent.as_os_str().is_empty() {
                        Path::new(".")
                    } else {
                        parent
                    };
                }
                _ => return Err(err),
            },
        }
    }
}

/// Mirror `src` into `dest`, returning the number of files copied.
fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| SiteError::Write {
                path: target.clone(),
                source,
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(|source| SiteError::Write {
                path: target.clone(),
                source,
            })?;
            debug!(file = %relative.display(), "copied asset");
            copied += 1;
        }
    }
    Ok(copied)
}

fn print_pricing(billing: BillingPeriod, json: bool) -> Result<()> {
    let rows: Vec<PlanPrice> = PLANS
        .iter()
        .map(|plan| PlanPrice {
            plan: plan.name,
            billing,
            display: plan.display(billing),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let savings = row.display.savings_text().unwrap_or_default();
        println!(
            "{:<12} {:>8}{:<4} {}",
            row.plan,
            row.display.amount_text(),
            row.display.suffix,
            savings
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_appends_missing_tail() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().canonicalize().expect("canonical");
        let resolved = resolve(&temp.path().join("dist/site")).expect("resolve");
        assert_eq!(resolved, root.join("dist").join("site"));
    }

    #[test]
    fn overlapping_asset_and_output_dirs_are_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let public = temp.path().join("public");
        fs::create_dir_all(&public).expect("mkdir");

        assert!(matches!(
            ensure_disjoint(&public, &public),
            Err(SiteError::AssetsOverlap { .. })
        ));
        assert!(matches!(
            ensure_disjoint(temp.path(), &temp.path().join("dist")),
            Err(SiteError::AssetsOverlap { .. })
        ));
        assert!(matches!(
            ensure_disjoint(&public, temp.path()),
            Err(SiteError::AssetsOverlap { .. })
        ));
        // same prefix, different directory
        assert!(ensure_disjoint(&public, &temp.path().join("public-dist")).is_ok());
    }
}
