use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ping the server.
    Ping,
    /// World related subcommands.
    World {
        #[command(subcommand)]
        command: WorldCommand,
    },
    /// File related subcommands.
    Fs {
        #[command(subcommand)]
        command: FsCommand,
    },
    /// server.properties related subcommands.
    Props {
        #[command(subcommand)]
        command: PropsCommand,
    },
    /// Server process related subcommands.
    Server {
        #[command(subcommand)]
        command: ServerCommand,
    },
}

#[derive(Subcommand)]
pub enum WorldCommand {
    /// Create a world named NAME.
    Create {
        name: String,
        /// Defaults to the server's default version.
        #[arg(short, long)]
        version: Option<String>,
    },
    /// List all worlds.
    List,
}

#[derive(Subcommand)]
pub enum FsCommand {
    /// List the top of WORLD's directory.
    Ls { world: String },
    /// List the folder TARGET under CURRENT.
    Enter {
        world: String,
        current: String,
        target: String,
    },
    /// List the parent of CURRENT.
    Up { world: String, current: String },
    /// Print the file TARGET under CURRENT.
    Cat {
        world: String,
        current: String,
        target: String,
    },
    /// Replace the content of PATH with FILE or stdin.
    Write {
        world: String,
        path: String,
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PropsCommand {
    /// Read KEY.
    Get { world: String, key: String },
    /// Set KEY to VALUE.
    Set {
        world: String,
        key: String,
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ServerCommand {
    /// Start the server.
    Start { world: String },
    /// Stop the server.
    Stop { world: String },
    /// Whether the server is running.
    Status { world: String },
    /// Send a console COMMAND.
    Cmd { world: String, command: String },
    /// Print the latest log.
    Logs { world: String },
}
