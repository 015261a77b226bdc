use clap::Parser;
use std::io::{BufWriter, IsTerminal};
use tagsel::cli::Cli;
use tagsel::input::{parse_games, read_input};
use tagsel::output::write_games;
use tagsel::select::select_games;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let (schema, registry) = cli.build_registry()?;

    let content = read_input(&cli.input)?;
    let games = parse_games(&content)?;
    let selected = select_games(&games, &schema, &registry, cli.sequential);

    info!(selected = selected.len(), total = games.len(), "selection complete");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_games(&mut out, &selected)?;
    Ok(())
}
