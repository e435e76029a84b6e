#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, HttpServer};
    use dealer_review::app::App;
    use dealer_review::config::Config;
    use dealer_review::seed::Seed;
    use dealer_review::store::{MemoryStore, Repository};
    use dealer_review::{api, gateway};
    use leptos::logging::log;
    use leptos::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;

    let config = Config::load().map_err(std::io::Error::other)?;

    // Seed data is a hard startup dependency
    let seed = Seed::load(&config.data_dir).await.map_err(std::io::Error::other)?;
    let store: Arc<dyn Repository> = Arc::new(MemoryStore::new(seed));
    let store = web::Data::from(store);

    // Leptos site options (bundle location) come from Cargo.toml metadata
    let conf = get_configuration(None).await.map_err(std::io::Error::other)?;
    let routes = generate_route_list(App);

    let addr = ("0.0.0.0", config.port);
    log!("[API] Server is running on http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        actix_web::App::new()
            .app_data(store.clone())
            .configure(api::configure)
            .configure(gateway::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use dealer_review::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
