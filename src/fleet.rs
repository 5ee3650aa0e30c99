//! Running server processes, one child per world.
//!
//! Console commands go through the child's stdin; there is no RCON here.
//! A world started by an earlier instance of this daemon is still visible
//! through the process table, but only as running: without its stdin there
//! is nothing to write to, so stop and command report it as not running.

use crate::config::Config;
use crate::error::Error;
use crate::message::Id;
use crate::registry::WorldRecord;
use crate::Result;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use sysinfo::{ProcessExt, System, SystemExt};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{info, warn};

pub struct Fleet {
    java_bin: String,
    java_heap_mb: u32,
    stop_timeout: Duration,
    running: Mutex<HashMap<Id, Child>>,
}

impl Fleet {
    pub fn new(config: &Config) -> Fleet {
        Fleet {
            java_bin: config.java_bin.clone(),
            java_heap_mb: config.java_heap_mb,
            stop_timeout: config.stop_timeout,
            running: Mutex::new(HashMap::new()),
        }
    }

    /// Launches the world's server unless it is already up.
    pub async fn start(&self, record: &WorldRecord, root: &Path) -> Result<()> {
        let mut running = self.running.lock().await;
        if let Some(child) = running.get_mut(&record.world) {
            if child.try_wait().map_err(Error::Io)?.is_none() {
                return Err(Error::ServerRunning);
            }
            running.remove(&record.world);
        }
        if probe(root) {
            return Err(Error::ServerRunning);
        }
        let jar = format!("{}.jar", record.version);
        let child = Command::new(&self.java_bin)
            .arg(format!("-Xmx{}M", self.java_heap_mb))
            .arg("-jar")
            .arg(&jar)
            .arg("nogui")
            .current_dir(root)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(Error::Io)?;
        info!("started {} with {}", record.world, jar);
        running.insert(record.world, child);
        Ok(())
    }

    /// Asks the server to save and exit, killing it when the ask fails
    /// or goes unanswered past the timeout.
    pub async fn stop(&self, world: &Id) -> Result<()> {
        let mut running = self.running.lock().await;
        let mut child = match running.remove(world) {
            Some(child) => child,
            None => return Err(Error::ServerNotRunning),
        };
        if child.try_wait().map_err(Error::Io)?.is_some() {
            return Err(Error::ServerNotRunning);
        }
        match send(&mut child, "stop").await {
            Ok(()) => match tokio::time::timeout(self.stop_timeout, child.wait()).await {
                Ok(status) => {
                    status.map_err(Error::Io)?;
                }
                Err(_) => {
                    warn!("{} ignored stop, killing", world);
                    child.kill().await.map_err(Error::Io)?;
                }
            },
            // The child is already out of the table; a stop that cannot
            // reach stdin still has to end the process.
            Err(_) => {
                warn!("{} unreachable over stdin, killing", world);
                child.kill().await.map_err(Error::Io)?;
            }
        }
        info!("stopped {}", world);
        Ok(())
    }

    /// Writes one line to the server console.
    pub async fn command(&self, world: &Id, command: &str) -> Result<()> {
        let mut running = self.running.lock().await;
        let child = match running.get_mut(world) {
            Some(child) => child,
            None => return Err(Error::ServerNotRunning),
        };
        if child.try_wait().map_err(Error::Io)?.is_some() {
            running.remove(world);
            return Err(Error::ServerNotRunning);
        }
        send(child, command).await
    }

    /// Child liveness, falling back to the process table.
    pub async fn status(&self, world: &Id, root: &Path) -> Result<bool> {
        let mut running = self.running.lock().await;
        if let Some(child) = running.get_mut(world) {
            if child.try_wait().map_err(Error::Io)?.is_none() {
                return Ok(true);
            }
            running.remove(world);
        }
        Ok(probe(root))
    }
}

async fn send(child: &mut Child, line: &str) -> Result<()> {
    let stdin = match child.stdin.as_mut() {
        Some(stdin) => stdin,
        None => return Err(Error::ServerNotRunning),
    };
    stdin.write_all(line.as_bytes()).await.map_err(Error::Io)?;
    stdin.write_all(b"\n").await.map_err(Error::Io)?;
    stdin.flush().await.map_err(Error::Io)
}

/// A java process working in the world directory counts as that world's
/// server, whoever launched it.
fn probe(root: &Path) -> bool {
    let sys = System::new_all();
    sys.processes()
        .values()
        .any(|p| p.name().contains("java") && p.cwd() == root)
}
