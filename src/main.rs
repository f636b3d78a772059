#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use aidjpro::app::*;
    use aidjpro::core::api::{AssetState, assets_router};
    use aidjpro::core::config::Config;
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).expect("invalid leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Frame set naming and location
    let config = Config::from_env();
    let frames_path = config.frames_path(&leptos_options.site_root);
    tracing::info!(
        "Config loaded: frames_dir={}, path={}",
        config.has_frames_dir(),
        frames_path.display()
    );

    // Count the frames once; the client fetches the result instead of guessing
    let asset_state = AssetState::scan(config.manifest_template(), &frames_path);

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Frames outside the site root are mounted explicitly
    let frames_router = if config.has_frames_dir() {
        Router::new().nest_service("/frames", ServeDir::new(&frames_path))
    } else {
        Router::new()
    };

    // Build the main application router with compression
    let app = Router::new()
        .merge(assets_router(asset_state))
        .merge(frames_router)
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        // Frames are already-compressed JPEGs; this mostly helps HTML and wasm
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);
    log!("Frame manifest: http://{}/api/frames/manifest", &addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
