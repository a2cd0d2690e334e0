use clap::Parser;
use tracing::{error, info, warn};

use metagov::{
    board::{resolve_board, resolve_one, BoardInput},
    cli::{init_logging, BoardArgs, Cli, Commands},
    config::MetagovConfig,
    format::Humanized,
};

fn load(args: &BoardArgs) -> Result<(BoardInput, MetagovConfig), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            MetagovConfig::load_from_file(path)?
        }
        None => MetagovConfig::default(),
    };

    let mut input = BoardInput::load_from_file(&args.input)?;
    if let Some(now) = args.now {
        input.now = Some(now);
    }
    if input.current_block == 0 {
        warn!("current_block is 0, countdowns will be empty");
    }
    info!(
        "🗳️ Loaded {} proposals, {} off-chain votes, {} federation proposals at block {}",
        input.proposals.len(),
        input.snapshot_proposals.len(),
        input.federation_proposals.len(),
        input.current_block
    );
    Ok((input, config))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Board(args) => {
            let (input, config) = load(&args)?;
            let rows = resolve_board(&input, &config, &Humanized);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::Status { board, id } => {
            let (input, config) = load(&board)?;
            let row = resolve_one(&input, id, &config, &Humanized)?;
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
        Commands::InitConfig { out } => {
            MetagovConfig::default().save_to_file(&out)?;
            info!("Default config written to {}", out.display());
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref());

    if let Err(e) = run(cli) {
        error!("metagov failed: {}", e);
        return Err(e);
    }
    Ok(())
}
