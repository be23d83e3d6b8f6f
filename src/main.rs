use astra::Server;
use listing_search::dataset::Dataset;
use listing_search::responses::error_to_response;
use listing_search::router::{handle, AppContext};
use listing_search::settings::Settings;

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
    let config = settings.service;

    // The dataset is read once; requests only ever borrow it.
    let dataset = match Dataset::load(&config.dataset_path, config.columns.clone()) {
        Ok(dataset) => dataset,
        Err(err) => {
            log::error!("Failed to load dataset {}: {err}", config.dataset_path);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {} listings from {}", dataset.len(), config.dataset_path);

    let ctx = AppContext::new(dataset);

    let addr = format!("{}:{}", config.address, config.port);
    log::info!("Starting listing service at http://{addr}");

    let server = Server::bind(addr.as_str()).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
        std::process::exit(1);
    }
}
