use std::net::SocketAddr;
use std::sync::Arc;

use isutrain_api::{app, AppState};
use isutrain_core::{injector, IsutrainMock};
use isutrain_store::{Config, PaymentMock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "isutrain_api=debug,isutrain_core=debug,isutrain_store=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!("Starting isutrain mock on port {}", config.server.port);

    let payments = Arc::new(PaymentMock::new());
    let mock = IsutrainMock::with_delays(payments, config.delays.to_delays());

    if !config.fault.fail_paths.is_empty() {
        tracing::warn!("Injecting failures for {:?}", config.fault.fail_paths);
        mock.inject(injector::fail_paths(config.fault.fail_paths.clone()));
    }

    let app = app(AppState::new(Arc::new(mock)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
