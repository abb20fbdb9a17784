//! Renders one listing page from a snapshot directory as JSON.
//!
//! Usage: `scanboard <listing> [query-string]`, e.g.
//! `scanboard sellers "search=lviv&page=2&per_page=20"`.

use std::env;
use std::process::ExitCode;

use dotenvy::dotenv;

use scanboard::domain::types::ListingKind;
use scanboard::dto::listing::ListingQuery;
use scanboard::forms::listing::ListingQueryForm;
use scanboard::models::config::DashboardConfig;
use scanboard::repository::JsonSnapshotRepository;
use scanboard::services::listings::load_listing_json;

fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let Some(listing) = args.next() else {
        log::error!("Usage: scanboard <listing> [query-string]");
        return ExitCode::FAILURE;
    };

    let kind = match listing.parse::<ListingKind>() {
        Ok(kind) => kind,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let form = match ListingQueryForm::from_query_string(&args.next().unwrap_or_default()) {
        Ok(form) => form,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let config_dir = env::var("SCANBOARD_CONFIG_DIR").unwrap_or_else(|_| "config".into());
    let config = match DashboardConfig::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let query = ListingQuery::from(form).or_items_per_page(config.items_per_page());
    let repo = JsonSnapshotRepository::new(&config.snapshot_dir);

    let page = match load_listing_json(&repo, kind, &query) {
        Ok(page) => page,
        Err(err) => {
            log::error!("Failed to render {}: {err}", kind.title());
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Failed to serialize page: {err}");
            ExitCode::FAILURE
        }
    }
}
