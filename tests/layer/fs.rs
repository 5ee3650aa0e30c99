use crate::common;
use serde_json::Value;
use std::fs;

fn navigate_raw(
    world: &str,
    path: &str,
    target: &str,
    action: &str,
    kind: &str,
) -> reqwest::RequestBuilder {
    reqwest::Client::new()
        .post(common::url())
        .header("type", "FsNavigate")
        .header("world", world)
        .header("path", path)
        .header("target", target)
        .header("action", action)
        .header("kind", kind)
}

/// Initial listing, enter, cat and up over a fresh world.
pub async fn navigate(world: &str) {
    // A log file as a running server would leave it.
    fs::create_dir_all(common::world_root(world).join("logs")).expect("logs dir");
    fs::write(common::world_root(world).join("logs/latest.log"), "[boot]\n").expect("log");

    let client = common::client();
    let body = client.fs_ls(world.to_string()).await.expect("ls");
    let listing: Value = serde_json::from_str(&body).expect("json");
    assert_eq!("listing", listing["view"]);
    assert_eq!("/", listing["label"]);
    let entries = listing["entries"].as_array().expect("entries");
    let names: Vec<&str> = entries.iter().map(|e| e["name"].as_str().expect("name")).collect();
    // One list, folders sorted among files by name.
    assert_eq!(vec!["1.21.jar", "eula.txt", "logs", "server.properties"], names);
    assert_eq!("folder", entries[2]["kind"]);
    assert_eq!(false, entries[0]["editable"]);
    assert_eq!(true, entries[1]["editable"]);
    assert_eq!(true, entries[3]["editable"]);

    let content = client
        .fs_cat(world.to_string(), String::new(), "eula.txt".into())
        .await
        .expect("cat");
    assert_eq!("eula=true\n", content);

    let body = client
        .fs_enter(world.to_string(), String::new(), "logs".into())
        .await
        .expect("enter");
    let inner: Value = serde_json::from_str(&body).expect("json");
    assert_eq!("/logs", inner["label"]);
    assert_eq!("latest.log", inner["entries"][0]["name"]);

    // Position is the path the listing handed back, not a client guess.
    let position = inner["path"].as_str().expect("path").to_string();
    let body = client.fs_up(world.to_string(), position).await.expect("up");
    let outer: Value = serde_json::from_str(&body).expect("json");
    assert_eq!("/", outer["label"]);
    assert_eq!(4, outer["entries"].as_array().expect("entries").len());
}

/// Whole-file writes, gated by the editable list and the sandbox.
pub async fn write(world: &str) {
    let client = common::client();
    let content = "motd=rewritten\r\nlevel-seed=42";
    client
        .fs_write_bytes(world.to_string(), "server.properties".into(), content.into())
        .await
        .expect("write");
    let on_disk = fs::read_to_string(common::world_root(world).join("server.properties"))
        .expect("read back");
    assert_eq!(content, on_disk);

    // The jar is not an editable extension.
    let response = write_raw(world, "1.21.jar", "overwritten").send().await.expect("send");
    assert_eq!(403, response.status().as_u16());
    assert_eq!("WriteDenied", response.headers()["error"].to_str().expect("str"));
    let jar = fs::read(common::world_root(world).join("1.21.jar")).expect("jar");
    assert_eq!(b"not really a jar\n".as_slice(), jar);

    // Writes may not leave the world, editable extension or not.
    let response = write_raw(world, "../evil.txt", "out").send().await.expect("send");
    assert_eq!(403, response.status().as_u16());
    assert!(!common::world_root(world).join("../evil.txt").exists());

    // Writes never create directories.
    let response = write_raw(world, "nope/x.txt", "x").send().await.expect("send");
    assert_eq!(404, response.status().as_u16());
}

fn write_raw(world: &str, path: &str, body: &'static str) -> reqwest::RequestBuilder {
    reqwest::Client::new()
        .post(common::url())
        .header("type", "FsWrite")
        .header("world", world)
        .header("path", path)
        .body(body)
}

/// The sandbox edge: going up from the root, traversal, sibling prefixes.
pub async fn boundaries(world: &str) {
    let client = common::client();
    let body = client.fs_up(world.to_string(), String::new()).await.expect("up");
    let view: Value = serde_json::from_str(&body).expect("json");
    assert_eq!("boundary_reached", view["view"]);

    let response = navigate_raw(world, "", "../..", "enter", "folder")
        .send()
        .await
        .expect("send");
    assert_eq!(404, response.status().as_u16());
    assert_eq!("NotFound", response.headers()["error"].to_str().expect("str"));

    // A sibling directory sharing the root as a string prefix is outside.
    let sibling = format!("{}0", common::world_root(world).display());
    fs::create_dir_all(&sibling).expect("sibling");
    let response = navigate_raw(world, &sibling, "", "up", "folder")
        .send()
        .await
        .expect("send");
    assert_eq!(404, response.status().as_u16());
    assert_eq!("NotFound", response.headers()["error"].to_str().expect("str"));
}
