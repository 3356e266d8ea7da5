use clap::Parser;
use piecewise::cli::{execute, PiecewiseCli};

fn main() -> anyhow::Result<()> {
    let cli = PiecewiseCli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.cmd, &mut out)
}
