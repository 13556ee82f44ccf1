use clap::Parser;
use pawapp::{
    conf::Cli,
    server,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("pawac")
        .module("pawctrl")
        .module("pawdb_sqlite")
        // .module("axum_login")
        // .module("tower_sessions")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder
        .build()
        .await
        .map_err(anyhow::Error::from_boxed)?;
    let app = server::app(platform);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    log::info!("listening on http://{}", &args.listen);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await
            }
        })
        .await?;

    Ok(())
}
