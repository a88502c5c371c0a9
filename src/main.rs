use card_clash::{config::Config, db::Db, services::auth::AuthService, tls, AppState};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,tower_http=debug,card_clash=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let config = Config::parse();
    let cookie_key = config.cookie_key()?;

    let state = AppState {
        db: Db::new(),
        auth: AuthService::new(config.credentials()),
        cookie_key,
        secure_cookies: config.is_production(),
        public_dir: config.public_dir.clone(),
    };
    let routes = card_clash::router(state);

    if config.https {
        let acceptor = tls::ensure_self_signed(&config.tls_cert, &config.tls_key)
            .and_then(|_| tls::load_acceptor(&config.tls_cert, &config.tls_key));
        match acceptor {
            Ok(acceptor) => {
                let address = config.https_address();
                let listener = tokio::net::TcpListener::bind(&address).await?;
                tracing::info!("server started on https://{address}");
                tracing::info!("browsers will warn about a self-signed certificate on localhost");
                axum::serve(tls::TlsListener::new(listener, acceptor)?, routes).await?;
                return Ok(());
            }
            Err(err) => {
                tracing::warn!("could not set up TLS, falling back to HTTP: {err:#}");
            }
        }
    }

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("server started on http://{address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
