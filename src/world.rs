//! World resolution and query dispatch.

use crate::config::Config;
use crate::error::Error;
use crate::fleet::Fleet;
use crate::message::{Id, Query, Reply};
use crate::navigator::Navigator;
use crate::registry::{Registry, WorldRecord};
use crate::{properties, provision, Result};
use http_body_util::BodyExt;
use rand::{distributions::Alphanumeric, Rng};
use std::path::PathBuf;
use tracing::info;

pub struct Worlds {
    config: &'static Config,
    registry: &'static Registry,
    fleet: &'static Fleet,
}

impl Worlds {
    pub fn new(
        config: &'static Config,
        registry: &'static Registry,
        fleet: &'static Fleet,
    ) -> Worlds {
        Worlds {
            config,
            registry,
            fleet,
        }
    }

    /// Handles every query. World-scoped ones are resolved against the
    /// registry first; the sandbox root comes from that resolution alone.
    pub async fn handle(&self, query: Query) -> Result<Reply> {
        match query {
            Query::WorldCreate { name, version } => self.create(name, version),
            Query::WorldList => Ok(Reply::WorldList {
                worlds: self.registry.list()?,
            }),
            query => {
                let record = self
                    .registry
                    .get(query.get_world())?
                    .ok_or(Error::InvalidWorld)?;
                let root = self
                    .config
                    .worlds_dir
                    .join(record.world.to_string())
                    .canonicalize()
                    .map_err(Error::Io)?;
                self.dispatch(query, record, root).await
            }
        }
    }

    async fn dispatch(&self, query: Query, record: WorldRecord, root: PathBuf) -> Result<Reply> {
        match query {
            Query::FsNavigate {
                path,
                target,
                action,
                kind,
                ..
            } => {
                let nav = Navigator::open(&root, &self.config.edit_extensions)?;
                Ok(Reply::FsNavigate {
                    view: nav.navigate(&path, &target, action, kind)?,
                })
            }
            Query::FsWrite { path, raw, .. } => {
                let content = raw.collect().await.map_err(Error::Hyper)?.to_bytes();
                let nav = Navigator::open(&root, &self.config.edit_extensions)?;
                nav.write(&path, &content)?;
                Ok(Reply::FsWrite)
            }
            Query::PropsGet { key, .. } => {
                let nav = Navigator::open(&root, &self.config.edit_extensions)?;
                let content = nav.read("server.properties")?;
                let value = properties::get(&content, &key).ok_or(Error::NotFound)?;
                Ok(Reply::PropsGet { value })
            }
            Query::PropsSet { key, value, .. } => {
                let nav = Navigator::open(&root, &self.config.edit_extensions)?;
                let content = nav.read("server.properties")?;
                nav.write(
                    "server.properties",
                    properties::set(&content, &key, &value).as_bytes(),
                )?;
                Ok(Reply::PropsSet)
            }
            Query::ServerStart { .. } => {
                self.fleet.start(&record, &root).await?;
                Ok(Reply::ServerStart)
            }
            Query::ServerStop { .. } => {
                self.fleet.stop(&record.world).await?;
                Ok(Reply::ServerStop)
            }
            Query::ServerStatus { .. } => Ok(Reply::ServerStatus {
                running: self.fleet.status(&record.world, &root).await?,
            }),
            Query::ServerCommand { command, .. } => {
                self.fleet.command(&record.world, &command).await?;
                Ok(Reply::ServerCommand)
            }
            Query::ServerLogs { .. } => Ok(Reply::ServerLogs {
                content: {
                    let nav = Navigator::open(&root, &self.config.edit_extensions)?;
                    nav.read("logs/latest.log")?
                },
            }),
            query => panic!("Query is not world-scoped: {:?}", query),
        }
    }

    fn create(&self, name: String, version: Option<String>) -> Result<Reply> {
        let version = version.unwrap_or_else(|| self.config.default_version.clone());
        let mut rng = rand::thread_rng();
        let world = loop {
            let id = Id::rand(&mut rng)?;
            if !self.registry.contains(&id)? {
                break id;
            }
        };
        let rcon_password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(16)
            .map(char::from)
            .collect();
        provision::provision(self.config, &world, &name, &version, &rcon_password)?;
        self.registry
            .create(&WorldRecord::new(world, &name, &version, &rcon_password))?;
        info!("created world {} ({})", world, version);
        Ok(Reply::WorldCreate { world, version })
    }
}
