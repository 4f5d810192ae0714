use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::{error, info};

use salesdesk_tui::api::{BookingService, Credentials, HttpBookingService};
use salesdesk_tui::app::App;
use salesdesk_tui::cli::CliArgs;
use salesdesk_tui::config::AppConfig;
use salesdesk_tui::event::{self, HeadlessOptions};
use salesdesk_tui::logging::{init_logging, LogTarget};
use salesdesk_tui::terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::load();

    let headless = args.headless || !is_terminal();
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    let _log_guard = init_logging(target, &config.log_dir, config.debug)?;

    info!(api = %config.api_base_url, page_size = config.page_size, headless, "starting");
    let service = HttpBookingService::new(&config.api_base_url)?;

    if headless {
        let options = HeadlessOptions {
            json: args.json,
            tab: args.tab,
            search: args.search,
            page: args.page,
            today: args.today,
            credentials: args
                .username
                .zip(args.password)
                .map(|(username, password)| Credentials { username, password }),
        };
        return event::run_headless(&service, config.page_size, &options).await;
    }

    let service: Arc<dyn BookingService> = Arc::new(service);
    let mut app = App::new(service, config.page_size);

    let mut tui = terminal::setup()?;
    let result = event::run(&mut tui, &mut app).await;
    terminal::cleanup(true, true);

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
