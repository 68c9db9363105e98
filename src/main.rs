mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

use ordertrack::api::{self, state::AppState};
use ordertrack::config::Config;
use ordertrack::hooks;
use ordertrack::store::FjallStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.telemetry.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Config::log_source();

    let store = FjallStore::open(&config.server.fjall_path)
        .map_err(|e| format!("Failed to open store: {}", e))?;
    let bind_addr = config.server.bind_addr;
    let state = AppState::new(config, store);

    match cli.command {
        Commands::Server(args) => {
            api::run(state, args.address.unwrap_or(bind_addr)).await?;
        }
        Commands::Shippers => {
            let shippers =
                hooks::shippers(&state).map_err(|e| format!("Failed to load shippers: {}", e))?;
            println!("{}", serde_json::to_string_pretty(&shippers)?);
        }
        Commands::Track(args) => {
            let payload = hooks::order_tracking_display(&state, args.order_id)
                .map_err(|e| format!("Failed to load order tracking: {}", e))?;
            match payload {
                Some(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
                None => eprintln!("No tracking information for order {}", args.order_id),
            }
        }
    }

    Ok(())
}
