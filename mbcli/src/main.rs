use clap::Parser;
use mbcli::{
    cli::{Cli, Command, FsCommand, PropsCommand, ServerCommand, WorldCommand},
    client::Client,
};
use std::process::exit;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = Client::default();

    let result = match cli.command {
        Command::Ping => client.ping().await,
        Command::World { command } => match command {
            WorldCommand::Create { name, version } => client.world_create(name, version).await,
            WorldCommand::List => client.world_list().await,
        },
        Command::Fs { command } => match command {
            FsCommand::Ls { world } => client.fs_ls(world).await,
            FsCommand::Enter {
                world,
                current,
                target,
            } => client.fs_enter(world, current, target).await,
            FsCommand::Up { world, current } => client.fs_up(world, current).await,
            FsCommand::Cat {
                world,
                current,
                target,
            } => client.fs_cat(world, current, target).await,
            FsCommand::Write { world, path, file } => client.fs_write(world, path, file).await,
        },
        Command::Props { command } => match command {
            PropsCommand::Get { world, key } => client.props_get(world, key).await,
            PropsCommand::Set { world, key, value } => client.props_set(world, key, value).await,
        },
        Command::Server { command } => match command {
            ServerCommand::Start { world } => client.server_start(world).await,
            ServerCommand::Stop { world } => client.server_stop(world).await,
            ServerCommand::Status { world } => client.server_status(world).await,
            ServerCommand::Cmd { world, command } => client.server_cmd(world, command).await,
            ServerCommand::Logs { world } => client.server_logs(world).await,
        },
    };

    match result {
        Ok(s) => println!("{}", s),
        Err(error) => {
            eprintln!("{}", error);
            exit(1)
        }
    }
}
