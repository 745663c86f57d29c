// Copyright (c) 2025 - Cowboy AI, Inc.
//! Floating IP command line tool
//!
//! Lists, inspects, reserves and releases DigitalOcean floating IPs.
//!
//! Run with: cargo run --bin floating-ips -- list --per-page 50
//!
//! Configuration comes from the environment:
//! 1. DIGITALOCEAN_TOKEN (required)
//! 2. DIGITALOCEAN_API_URL (optional, defaults to https://api.digitalocean.com/)
//! 3. DIGITALOCEAN_TIMEOUT_SECS (optional, defaults to 30)

use anyhow::{bail, Context, Result};
use cim_infrastructure_digitalocean::{
    Client, ClientConfig, FloatingIpCreateRequest, FloatingIpsService, ListOptions,
    ResourceWithUrn,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "floating-ips", about = "Manage DigitalOcean floating IPs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List floating IPs
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show a single floating IP
    Get { ip: String },
    /// Reserve a floating IP in a region or for a droplet
    Create {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        droplet_id: Option<u64>,
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Release a floating IP
    Delete { ip: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("Failed to load DigitalOcean configuration")?;
    info!("Using DigitalOcean API at {}", config.base_url);

    let client = Client::new(config).context("Failed to create DigitalOcean client")?;
    let floating_ips = client.floating_ips();

    match cli.command {
        Command::List { page, per_page } => {
            let opts = ListOptions { page, per_page };
            let (ips, response) = floating_ips
                .list(Some(&opts))
                .await
                .context("Failed to list floating IPs")?;

            let output = json!({
                "floating_ips": ips,
                "links": response.links,
                "meta": response.meta,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Get { ip } => {
            let (floating_ip, _) = floating_ips
                .get(&ip)
                .await
                .with_context(|| format!("Failed to get floating IP {}", ip))?;

            info!("URN: {}", floating_ip.urn());
            println!("{}", serde_json::to_string_pretty(&floating_ip)?);
        }
        Command::Create {
            region,
            droplet_id,
            project_id,
        } => {
            if region.is_none() && droplet_id.is_none() {
                bail!("Either --region or --droplet-id is required");
            }

            let request = FloatingIpCreateRequest {
                region,
                droplet_id,
                project_id,
            };
            let (floating_ip, _) = floating_ips
                .create(&request)
                .await
                .context("Failed to create floating IP")?;

            println!("{}", serde_json::to_string_pretty(&floating_ip)?);
        }
        Command::Delete { ip } => {
            let response = floating_ips
                .delete(&ip)
                .await
                .with_context(|| format!("Failed to delete floating IP {}", ip))?;

            info!("Released {} ({})", ip, response.status);
        }
    }

    Ok(())
}
