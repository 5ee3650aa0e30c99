use crate::common;
use serde_json::Value;

/// Create a world and find it in the list. Returns its id.
pub async fn create_and_list() -> String {
    let client = common::client();
    let body = client
        .world_create("Creeper Farm".into(), None)
        .await
        .expect("create");
    let created: Value = serde_json::from_str(&body).expect("json");
    let world = created["world"].as_str().expect("world").to_string();
    assert_eq!(16, world.len());
    assert_eq!("1.21", created["version"].as_str().expect("version"));
    assert!(common::world_root(&world).join("server.properties").is_file());

    let listing = client.world_list().await.expect("list");
    assert!(listing.contains(&world));
    assert!(listing.contains("Creeper Farm"));
    // The RCON password stays in the registry.
    assert!(!listing.contains("rcon_password"));
    world
}

/// Ids that are not in the registry resolve to nothing.
pub async fn unknown() {
    let response = reqwest::Client::new()
        .post(common::url())
        .header("type", "ServerStatus")
        .header("world", "00000000deadbeef")
        .send()
        .await
        .expect("send");
    assert_eq!(404, response.status().as_u16());
    assert_eq!("InvalidWorld", response.headers()["error"].to_str().expect("str"));
}
