//! First launch layout of a world: directory, server jar, eula, properties.

use crate::config::Config;
use crate::error::Error;
use crate::message::Id;
use crate::{properties, Result};
use std::fs;
use std::path::PathBuf;

/// Stock `server.properties` for new worlds. The motd and RCON password
/// are filled in per world.
const DEFAULT_PROPERTIES: &str = "#Minecraft server properties
enable-jmx-monitoring=false
rcon.port=25575
gamemode=survival
enable-command-block=false
enable-query=false
level-name=world
motd=A Minecraft Server
query.port=25565
pvp=true
difficulty=easy
network-compression-threshold=256
max-players=20
online-mode=true
enable-status=true
allow-flight=false
view-distance=10
rcon.password=
server-port=25565
enable-rcon=false
white-list=false
spawn-protection=16
max-world-size=29999984
";

/// Creates the on-disk layout for a new world and returns its root.
pub fn provision(
    config: &Config,
    world: &Id,
    name: &str,
    version: &str,
    rcon_password: &str,
) -> Result<PathBuf> {
    let jar = config.versions_dir.join(format!("{}.jar", version));
    if !jar.is_file() {
        return Err(Error::VersionUnknown);
    }
    let root = config.worlds_dir.join(world.to_string());
    fs::create_dir_all(&root).map_err(Error::Io)?;
    fs::copy(&jar, root.join(format!("{}.jar", version))).map_err(Error::Io)?;
    fs::write(root.join("eula.txt"), "eula=true\n").map_err(Error::Io)?;
    let props = properties::set(DEFAULT_PROPERTIES, "motd", name);
    let props = properties::set(&props, "rcon.password", rcon_password);
    fs::write(root.join("server.properties"), props).map_err(Error::Io)?;
    Ok(root)
}
