use anyhow::Result;
use clap::Parser;
use spruce_loom::Spruce;

fn main() -> Result<()> {
    // Lifecycle output owns stdout, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Spruce::parse();
    cli.command.execute()
}
