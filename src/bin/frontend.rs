use astra::Server;
use listing_search::frontend::{handle, ApiClient, FrontendContext};
use listing_search::settings::Settings;
use listing_search::templates::html_error_response;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };
    let config = settings.frontend;

    let api = match ApiClient::new(&config.backend_url) {
        Ok(api) => api,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    log::info!("Using listing service at {}", api.base_url());

    let ctx = FrontendContext { api };

    let addr = format!("{}:{}", config.address, config.port);
    log::info!("Starting frontend at http://{addr}");

    let server = Server::bind(addr.as_str()).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("Frontend ended with error: {e}");
        std::process::exit(1);
    }
}
