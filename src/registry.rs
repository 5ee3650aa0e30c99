//! SQLite-backed world registry.

use crate::config::Config;
use crate::error::Error;
use crate::message::Id;
use crate::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Mutex;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS worlds (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    world TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    version TEXT NOT NULL,
    players INTEGER NOT NULL,
    rcon_password TEXT NOT NULL,
    created TEXT NOT NULL
);
";

const COLUMNS: &str = "world, name, version, players, rcon_password, created";

/// One registered world. The RCON password never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct WorldRecord {
    pub world: Id,
    pub name: String,
    pub version: String,
    pub players: i64,
    #[serde(skip)]
    pub rcon_password: String,
    pub created: String,
}

impl WorldRecord {
    pub fn new(world: Id, name: &str, version: &str, rcon_password: &str) -> WorldRecord {
        WorldRecord {
            world,
            name: name.into(),
            version: version.into(),
            players: 20,
            rcon_password: rcon_password.into(),
            created: Utc::now().to_rfc3339(),
        }
    }

    fn from_row(row: &Row) -> rusqlite::Result<WorldRecord> {
        let world: String = row.get(0)?;
        Ok(WorldRecord {
            world: Id::from_str(&world).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    0,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
            name: row.get(1)?,
            version: row.get(2)?,
            players: row.get(3)?,
            rcon_password: row.get(4)?,
            created: row.get(5)?,
        })
    }
}

pub struct Registry {
    conn: Mutex<Connection>,
}

impl Registry {
    /// Open the database, creating the schema on first run.
    pub fn new(config: &Config) -> Registry {
        if let Some(dir) = config.database_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).expect("database directory?");
            }
        }
        let conn = Connection::open(&config.database_path).expect("worlds database offline?");
        Registry::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Registry {
        conn.execute_batch(SCHEMA).expect("worlds schema?");
        Registry {
            conn: Mutex::new(conn),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Registry {
        Registry::with_connection(Connection::open_in_memory().expect("in-memory database?"))
    }

    pub fn create(&self, record: &WorldRecord) -> Result<()> {
        self.conn
            .lock()
            .unwrap()
            .execute(
                "INSERT INTO worlds (world, name, version, players, rcon_password, created)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.world.to_string(),
                    record.name,
                    record.version,
                    record.players,
                    record.rcon_password,
                    record.created
                ],
            )
            .map_err(Error::Sqlite)?;
        Ok(())
    }

    pub fn get(&self, world: &Id) -> Result<Option<WorldRecord>> {
        self.conn
            .lock()
            .unwrap()
            .query_row(
                &format!("SELECT {} FROM worlds WHERE world = ?1", COLUMNS),
                params![world.to_string()],
                WorldRecord::from_row,
            )
            .optional()
            .map_err(Error::Sqlite)
    }

    pub fn contains(&self, world: &Id) -> Result<bool> {
        let n: i64 = self
            .conn
            .lock()
            .unwrap()
            .query_row(
                "SELECT COUNT(*) FROM worlds WHERE world = ?1",
                params![world.to_string()],
                |row| row.get(0),
            )
            .map_err(Error::Sqlite)?;
        Ok(n > 0)
    }

    /// All worlds, newest first.
    pub fn list(&self) -> Result<Vec<WorldRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM worlds ORDER BY created DESC",
                COLUMNS
            ))
            .map_err(Error::Sqlite)?;
        let rows = stmt
            .query_map([], WorldRecord::from_row)
            .map_err(Error::Sqlite)?;
        let mut worlds = Vec::new();
        for row in rows {
            worlds.push(row.map_err(Error::Sqlite)?);
        }
        Ok(worlds)
    }

    pub fn set_players(&self, world: &Id, players: i64) -> Result<()> {
        let changed = self
            .conn
            .lock()
            .unwrap()
            .execute(
                "UPDATE worlds SET players = ?2 WHERE world = ?1",
                params![world.to_string(), players],
            )
            .map_err(Error::Sqlite)?;
        if changed == 0 {
            return Err(Error::InvalidWorld);
        }
        Ok(())
    }

    pub fn remove(&self, world: &Id) -> Result<()> {
        let changed = self
            .conn
            .lock()
            .unwrap()
            .execute(
                "DELETE FROM worlds WHERE world = ?1",
                params![world.to_string()],
            )
            .map_err(Error::Sqlite)?;
        if changed == 0 {
            return Err(Error::InvalidWorld);
        }
        Ok(())
    }
}
