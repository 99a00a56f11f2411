use anyhow::Context;
use filedock::config::Config;
use filedock::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    if !cfg.storage.directory.exists() {
        tracing::info!("Creating storage directory {}", cfg.storage.directory.display());
        tokio::fs::create_dir_all(&cfg.storage.directory)
            .await
            .with_context(|| {
                format!("creating storage directory {}", cfg.storage.directory.display())
            })?;
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
