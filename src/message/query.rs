use super::Id;
use crate::error::Error;
use crate::navigator::{EntryKind, NavAction};
use hyper::{body::Incoming, Request};
use std::str::FromStr;

#[derive(Debug)]
pub enum Query {
    WorldCreate {
        name: String,
        version: Option<String>,
    },
    WorldList,
    FsNavigate {
        world: Id,
        path: String,
        target: String,
        action: NavAction,
        kind: EntryKind,
    },
    FsWrite {
        world: Id,
        path: String,
        raw: Incoming,
    },
    PropsGet {
        world: Id,
        key: String,
    },
    PropsSet {
        world: Id,
        key: String,
        value: String,
    },
    ServerStart {
        world: Id,
    },
    ServerStop {
        world: Id,
    },
    ServerStatus {
        world: Id,
    },
    ServerCommand {
        world: Id,
        command: String,
    },
    ServerLogs {
        world: Id,
    },
}

impl Query {
    /// Get the world id from a world-scoped query
    pub fn get_world(&self) -> &Id {
        match self {
            Query::FsNavigate { world, .. } => world,
            Query::FsWrite { world, .. } => world,
            Query::PropsGet { world, .. } => world,
            Query::PropsSet { world, .. } => world,
            Query::ServerStart { world } => world,
            Query::ServerStop { world } => world,
            Query::ServerStatus { world } => world,
            Query::ServerCommand { world, .. } => world,
            Query::ServerLogs { world } => world,
            _ => panic!("Query has no world: {:?}", self),
        }
    }
    /// Retrive value by key from header map
    pub fn retrieve<'a>(req: &'a Request<Incoming>, key: &'a str) -> Result<&'a str, Error> {
        if let Some(r) = req.headers().get(key) {
            if let Ok(s) = r.to_str() {
                return Ok(s);
            }
        }
        Err(Error::ApiMissingEntry)
    }
}

/// Try from http request to rust struct
impl TryFrom<Request<Incoming>> for Query {
    type Error = Error;
    fn try_from(req: Request<Incoming>) -> Result<Self, Self::Error> {
        match Query::retrieve(&req, "type") {
            Ok(v) => match v {
                "WorldCreate" => Ok(Query::WorldCreate {
                    name: Query::retrieve(&req, "name")?.to_string(),
                    version: Query::retrieve(&req, "version").ok().map(str::to_string),
                }),
                "WorldList" => Ok(Query::WorldList),
                "FsNavigate" => Ok(Query::FsNavigate {
                    world: Id::try_get(&req, "world")?,
                    path: Query::retrieve(&req, "path").unwrap_or("").to_string(),
                    target: Query::retrieve(&req, "target").unwrap_or("").to_string(),
                    action: NavAction::from_str(Query::retrieve(&req, "action")?)?,
                    kind: EntryKind::from_str(Query::retrieve(&req, "kind").unwrap_or("folder"))?,
                }),
                "FsWrite" => Ok(Query::FsWrite {
                    world: Id::try_get(&req, "world")?,
                    path: Query::retrieve(&req, "path")?.to_string(),
                    raw: req.into_body(),
                }),
                "PropsGet" => Ok(Query::PropsGet {
                    world: Id::try_get(&req, "world")?,
                    key: Query::retrieve(&req, "key")?.to_string(),
                }),
                "PropsSet" => Ok(Query::PropsSet {
                    world: Id::try_get(&req, "world")?,
                    key: Query::retrieve(&req, "key")?.to_string(),
                    value: Query::retrieve(&req, "value")?.to_string(),
                }),
                "ServerStart" => Ok(Query::ServerStart {
                    world: Id::try_get(&req, "world")?,
                }),
                "ServerStop" => Ok(Query::ServerStop {
                    world: Id::try_get(&req, "world")?,
                }),
                "ServerStatus" => Ok(Query::ServerStatus {
                    world: Id::try_get(&req, "world")?,
                }),
                "ServerCommand" => Ok(Query::ServerCommand {
                    world: Id::try_get(&req, "world")?,
                    command: Query::retrieve(&req, "command")?.to_string(),
                }),
                "ServerLogs" => Ok(Query::ServerLogs {
                    world: Id::try_get(&req, "world")?,
                }),
                _ => Err(Error::ApiUnknownQueryType),
            },
            Err(_) => Err(Error::ApiMissingQueryType),
        }
    }
}
