use std::sync::Arc;

use aqproxy_server::{app, cli::Args};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,aqproxy=debug,aqproxy_moenv=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let args = Args::parse();
    let proxy = args.build_proxy()?;

    if args.check_config {
        let window = proxy.validate()?;
        println!(
            "configuration ok: {} hourly instants from {} to {} via {}",
            window.len(),
            window.first(),
            window.last(),
            proxy.source_name(),
        );
        return Ok(());
    }

    if let Err(e) = proxy.validate() {
        tracing::warn!(error = %e, "configuration incomplete; data requests will fail until fixed");
    }

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        source = proxy.source_name(),
        "listening"
    );
    axum::serve(listener, app(Arc::new(proxy)))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
