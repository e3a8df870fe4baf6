//! Member registry HTTP server entry point.

use anyhow::{anyhow, Context};
use log::{error, info};
use miembros_server::{build_app, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.init_logging().map_err(|err| anyhow!(err))?;
    info!(
        "event=server_init module=http status=start version={} db_path={}",
        miembros_core::core_version(),
        config.db_path
    );

    let conn = config
        .open_database()
        .with_context(|| format!("failed to open database `{}`", config.db_path))?;
    let state = AppState::new(conn);
    let members = state
        .with_service(|service| service.list_members())
        .await?
        .context("failed to read stored members")?;
    info!(
        "event=member_list module=service status=ok member_count={}",
        members.len()
    );
    let app = build_app(state, config.static_dir.as_deref());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind `{addr}`"))?;
    info!("event=server_listen module=http status=ok addr={addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")?;

    info!("event=server_stop module=http status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=server_stop module=http status=error error_code=signal_failed error={err}");
        // Without a signal source, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
}
