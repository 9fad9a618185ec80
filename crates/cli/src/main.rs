use anyhow::Result;
use clap::Parser;
use dotrunner_cli::Runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::parse();
    runner.command.execute(&runner.global).await
}
