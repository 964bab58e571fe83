use clap::Parser;
use kickflip::catalog::Catalog;
use kickflip::players::{Human, Robot};
use kickflip::tournament::Tournament;
use kickflip::view;

/// Turn-based skateboarding championship.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Skater name; prompted interactively when omitted.
    #[arg(long)]
    name: Option<String>,
    /// Seed the run for a reproducible tournament.
    #[arg(long)]
    seed: Option<u64>,
    /// Path to a custom trick catalog (JSON array of trick definitions).
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    kickflip::log();
    let args = Args::parse();
    let catalog = match args.catalog {
        Some(ref path) => Catalog::load(path)?,
        None => Catalog::standard(),
    };
    view::intro();
    let name = match args.name {
        Some(name) => name,
        None => dialoguer::Input::new()
            .with_prompt("Enter your skater name")
            .interact()?,
    };
    let champion = Tournament::new(&catalog, args.seed).run(&name, &Human, &Robot);
    view::outro(champion);
    Ok(())
}
