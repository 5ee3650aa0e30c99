use crate::common;

/// Set one key, read it back, and miss on a key that is not there.
pub async fn roundtrip(world: &str) {
    let client = common::client();
    client
        .props_set(world.to_string(), "motd".into(), "Welcome, stranger".into())
        .await
        .expect("set");
    let value = client
        .props_get(world.to_string(), "motd".into())
        .await
        .expect("get");
    assert_eq!("Welcome, stranger", value);

    // A missing key is a miss, not an empty value.
    let response = reqwest::Client::new()
        .post(common::url())
        .header("type", "PropsGet")
        .header("world", world)
        .header("key", "no-such-key")
        .send()
        .await
        .expect("send");
    assert_eq!(404, response.status().as_u16());
    assert_eq!("NotFound", response.headers()["error"].to_str().expect("str"));
}
