use advertisements_backend_rs::{
    app::App,
    types::{Config, StartupError, ToContext},
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    init_tracing();

    let ctx = Arc::new(Config::from_env()?.to_context().await?);

    App::new(ctx).serve().await?;

    Ok(())
}
