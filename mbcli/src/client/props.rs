use super::{get_header, Client, Result};
use crate::handle_error;

impl Client {
    /// Read one key from the world's server.properties.
    pub async fn props_get(&self, world: String, key: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "PropsGet")
            .header("world", world)
            .header("key", key)
            .send()
            .await?;
        handle_error!(response);
        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        Ok(body["value"].as_str().unwrap_or_default().to_string())
    }

    /// Set one key in the world's server.properties.
    pub async fn props_set(&self, world: String, key: String, value: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "PropsSet")
            .header("world", world)
            .header("key", key)
            .header("value", value)
            .send()
            .await?;
        handle_error!(response);
        Ok("set".into())
    }
}
