pub mod api;
pub mod config;
pub mod error;
pub mod fleet;
pub mod message;
pub mod navigator;
pub mod properties;
pub mod provision;
pub mod registry;
pub mod world;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Layers live as long as the process.
#[macro_export]
macro_rules! to_static {
    ($e:expr) => {
        Box::leak(Box::new($e))
    };
}

/// Build the layer chain, then serve.
pub async fn run() {
    // Config: collect ENV
    let config: &'static config::Config = to_static!(config::Config::new());
    std::fs::create_dir_all(&config.worlds_dir).expect("worlds directory?");
    std::fs::create_dir_all(&config.versions_dir).expect("versions directory?");
    // Registry: world records
    let registry: &'static registry::Registry = to_static!(registry::Registry::new(config));
    // Fleet: running servers
    let fleet: &'static fleet::Fleet = to_static!(fleet::Fleet::new(config));
    // Worlds: resolution and dispatch
    let worlds: &'static world::Worlds = to_static!(world::Worlds::new(config, registry, fleet));
    // Api: http endpoint
    let api: &'static api::Api = to_static!(api::Api::new(config, worlds));
    // Serve
    api.serve().await.expect("api offline?");
}
