use ferrous_lookup_application::use_cases::ExecuteLookupUseCase;
use ferrous_lookup_domain::{LookupOutcome, LookupRequest};
use ferrous_lookup_infrastructure::dns::UdpLookupClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

mod args;
mod bootstrap;
mod output;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_normalized();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(&config);

    let server = SocketAddr::new(cli.server.into(), config.lookup.port);
    let query_type = cli.query_type();
    info!(server = %server, name = %cli.name, record_type = %query_type, "Starting lookup");

    let use_case = ExecuteLookupUseCase::new(Arc::new(
        UdpLookupClient::connect(server, config.lookup.clone()).await?,
    ));

    let outcome = match LookupRequest::new(&cli.name, query_type) {
        Ok(request) => use_case.execute(&request).await,
        Err(e) => LookupOutcome::Failed(e),
    };
    debug!(status = outcome.status(), "Lookup finished");

    println!("{}", output::render(&outcome));

    let code = output::exit_code(&outcome);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
