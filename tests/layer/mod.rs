pub mod api;
pub mod fs;
pub mod props;
pub mod server;
pub mod world;

/// Drive every layer against one live instance.
pub async fn all() {
    api::ping().await;
    let world = world::create_and_list().await;
    fs::navigate(&world).await;
    fs::write(&world).await;
    fs::boundaries(&world).await;
    props::roundtrip(&world).await;
    server::lifecycle(&world).await;
    world::unknown().await;
}
