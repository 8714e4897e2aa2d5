use std::path::PathBuf;

use anyhow::Context;
use blogview::config::{Config, ConfigStore};
use blogview::logging::init_tracing;
use blogview::ui::runtime;
use clap::Parser;

/// Terminal client for the blog service.
#[derive(Debug, Parser)]
#[command(name = "blogview", version, about)]
struct Args {
    /// Config file (default: ~/.config/blogview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial location, e.g. "?page=study" or "blogview://home?blogId=3"
    #[arg(long, value_name = "QUERY", default_value = "")]
    location: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let path = args.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    let store = ConfigStore::new(config);
    if let Some(base_url) = args.base_url {
        store.update(|config| config.api.base_url = base_url);
    }
    let config = store.get();
    config.validate().context("Invalid configuration")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime::run(&config, &args.location, rt.handle().clone()).context("Terminal UI failed")?;
    Ok(())
}
