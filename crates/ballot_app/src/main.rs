use ballot_app::logging::{self, LogDestination};
use ballot_app::{AppConfig, Session};
use ballot_core::AppViewModel;
use ballot_logging::{ballot_error, ballot_info, ballot_warn};
use log::LevelFilter;

#[tokio::main]
async fn main() {
    logging::initialize(LogDestination::Both, LevelFilter::Info);

    let config = AppConfig::from_env();
    let mut session = match Session::connect(&config) {
        Ok(session) => session,
        Err(err) => {
            ballot_error!("Could not create vote client: {}", err);
            std::process::exit(1);
        }
    };

    session.mount();
    session.run_until_loaded().await;
    report(&session.view());
    session.unmount();
}

fn report(view: &AppViewModel) {
    match &view.countries_error {
        Some(message) => ballot_warn!("Countries: {}", message),
        None => ballot_info!("Countries: {} available", view.countries.len()),
    }
    if let Some(message) = &view.rankings.error_message {
        ballot_warn!("Rankings: {}", message);
        return;
    }
    for row in &view.rankings.rows {
        ballot_info!("#{} {} ({} votes)", row.rank, row.country_name, row.vote_count);
    }
}
