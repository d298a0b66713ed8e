use clap::Parser;
use statuswatch::adapter::inbound::cli::{command::Cli, dispatch, output};
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json));

    if let Err(e) = dispatch::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }

    info!("statuswatch stopped");
}
