use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

pub struct Config {
    pub http_addr: SocketAddr,
    pub worlds_dir: PathBuf,
    pub database_path: PathBuf,
    pub versions_dir: PathBuf,
    pub default_version: String,
    pub java_bin: String,
    pub java_heap_mb: u32,
    pub stop_timeout: Duration,
    pub edit_extensions: Vec<String>,
}

impl Config {
    pub fn new() -> Config {
        Config {
            http_addr: match env::var("HTTP_ADDR") {
                Ok(var) => var.parse().unwrap(),
                Err(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080),
            },
            worlds_dir: match env::var("WORLDS_DIR") {
                Ok(var) => PathBuf::from(var),
                Err(_) => PathBuf::from("minecraft_worlds"),
            },
            database_path: match env::var("DATABASE_PATH") {
                Ok(var) => PathBuf::from(var),
                Err(_) => PathBuf::from("mineboard.db"),
            },
            versions_dir: match env::var("VERSIONS_DIR") {
                Ok(var) => PathBuf::from(var),
                Err(_) => PathBuf::from("versions"),
            },
            default_version: match env::var("DEFAULT_VERSION") {
                Ok(var) => var,
                Err(_) => String::from("1.21"),
            },
            java_bin: match env::var("JAVA_BIN") {
                Ok(var) => var,
                Err(_) => String::from("java"),
            },
            java_heap_mb: match env::var("JAVA_HEAP_MB") {
                Ok(var) => var.parse().unwrap(),
                Err(_) => 2048,
            },
            stop_timeout: match env::var("STOP_TIMEOUT") {
                Ok(var) => Duration::from_secs(var.parse().unwrap()),
                Err(_) => Duration::from_secs(10),
            },
            edit_extensions: match env::var("EDIT_EXTENSIONS") {
                Ok(var) => var.split(',').map(|s| s.trim().to_string()).collect(),
                Err(_) => vec!["properties".into(), "json".into(), "txt".into()],
            },
        }
    }
}
