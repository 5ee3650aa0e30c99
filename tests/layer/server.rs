use crate::common;
use serde_json::Value;

fn post(kind: &str, world: &str) -> reqwest::RequestBuilder {
    reqwest::Client::new()
        .post(common::url())
        .header("type", kind)
        .header("world", world)
}

/// Lifecycle on a host with no java: status, refusals, logs.
pub async fn lifecycle(world: &str) {
    let client = common::client();
    assert_eq!("stopped", client.server_status(world.to_string()).await.expect("status"));

    // Stop and command need a running child.
    let response = post("ServerStop", world).send().await.expect("send");
    assert_eq!(409, response.status().as_u16());
    assert_eq!("ServerNotRunning", response.headers()["error"].to_str().expect("str"));
    let response = post("ServerCommand", world)
        .header("command", "say hi")
        .send()
        .await
        .expect("send");
    assert_eq!(409, response.status().as_u16());

    // latest.log verbatim, as planted by the fs layer.
    assert_eq!("[boot]\n", client.server_logs(world.to_string()).await.expect("logs"));

    // A world that never ran has no log yet.
    let body = common::client()
        .world_create("Blank".into(), Some("1.21".into()))
        .await
        .expect("create");
    let fresh: Value = serde_json::from_str(&body).expect("json");
    let response = post("ServerLogs", fresh["world"].as_str().expect("world"))
        .send()
        .await
        .expect("send");
    assert_eq!(404, response.status().as_u16());

    // The configured java binary does not exist, so start surfaces the OS error.
    let response = post("ServerStart", world).send().await.expect("send");
    assert_eq!(500, response.status().as_u16());
    assert_eq!("Io", response.headers()["error"].to_str().expect("str"));
}
