#[cfg(not(target_arch = "wasm32"))]
fn init() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // .env is a desktop dev convenience; assets/config.env covers the rest
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env"),
    }
}

#[cfg(target_arch = "wasm32")]
fn init() {}

fn main() {
    init();
    tracing::info!(
        base = %medassist::config::ApiConfig::load().base_url(),
        "starting medical assistant console"
    );
    dioxus::launch(medassist::ui::App);
}
