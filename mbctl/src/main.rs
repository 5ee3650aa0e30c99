use clap::{Parser, Subcommand};
use mineboard::config::Config;
use mineboard::message::Id;
use mineboard::registry::Registry;
use mineboard::{to_static, Error};
use std::process::exit;
use std::str::FromStr;

fn main() {
    let config: &'static Config = to_static!(Config::new());
    let registry: &'static Registry = to_static!(Registry::new(config));

    let cli = Cli::parse();
    let result = match cli.command {
        // Opening the registry above already created the schema.
        Command::Init => std::fs::create_dir_all(&config.worlds_dir)
            .and_then(|_| std::fs::create_dir_all(&config.versions_dir))
            .map_err(Error::Io),
        Command::Remove { world } => {
            Id::from_str(&world).and_then(|world| registry.remove(&world))
        }
        Command::SetPlayers { world, players } => {
            Id::from_str(&world).and_then(|world| registry.set_players(&world, players))
        }
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        exit(1);
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the database and directories.
    Init,
    /// Drop WORLD from the registry. Its files are kept.
    Remove { world: String },
    /// Set the player limit of WORLD.
    SetPlayers { world: String, players: i64 },
}
