use mbcli::client::Client;
use rand::{distributions::Alphanumeric, Rng};
use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

const HTTP_ADDR: &str = "127.0.0.1:18464";

/// Point the instance at scratch directories and a port of its own, and
/// plant a fake `1.21.jar` so worlds can be provisioned. Must run before
/// the instance is spawned.
pub fn set_env() {
    let scratch = env::temp_dir().join(format!("mineboard-it-{}", random_string(8)));
    let worlds = scratch.join("worlds");
    let versions = scratch.join("versions");
    fs::create_dir_all(&worlds).expect("worlds dir");
    fs::create_dir_all(&versions).expect("versions dir");
    fs::write(versions.join("1.21.jar"), b"not really a jar\n").expect("jar");
    env::set_var("HTTP_ADDR", HTTP_ADDR);
    env::set_var("WORLDS_DIR", &worlds);
    env::set_var("VERSIONS_DIR", &versions);
    env::set_var("DATABASE_PATH", scratch.join("mineboard.db"));
    // No java on the test host; start must fail instead of hang.
    env::set_var("JAVA_BIN", scratch.join("no-such-java"));
}

pub fn url() -> String {
    format!("http://{}", HTTP_ADDR)
}

/// A client aimed at the test instance, bypassing any saved config.
pub fn client() -> Client {
    let mut client = Client::zero();
    client.config.url = url();
    client
}

/// On-disk root of a world, for planting and inspecting files directly.
pub fn world_root(world: &str) -> PathBuf {
    PathBuf::from(env::var("WORLDS_DIR").expect("WORLDS_DIR")).join(world)
}

/// Poll until the instance answers, or give up.
pub async fn wait_ready() {
    for _ in 0..50 {
        if let Ok(response) = reqwest::get(url()).await {
            if response.text().await.unwrap_or_default() == "PONG" {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("api offline?");
}

/// Generate a random String with length n.
pub fn random_string(n: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}
