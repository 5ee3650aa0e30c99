use super::{get_header, Client, Result};
use crate::handle_error;

impl Client {
    pub async fn server_start(&self, world: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "ServerStart")
            .header("world", world)
            .send()
            .await?;
        handle_error!(response);
        Ok("started".into())
    }

    pub async fn server_stop(&self, world: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "ServerStop")
            .header("world", world)
            .send()
            .await?;
        handle_error!(response);
        Ok("stopped".into())
    }

    pub async fn server_status(&self, world: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "ServerStatus")
            .header("world", world)
            .send()
            .await?;
        handle_error!(response);
        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        Ok(match body["running"].as_bool() {
            Some(true) => "running".into(),
            _ => "stopped".into(),
        })
    }

    pub async fn server_cmd(&self, world: String, command: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "ServerCommand")
            .header("world", world)
            .header("command", command)
            .send()
            .await?;
        handle_error!(response);
        Ok("sent".into())
    }

    /// The current latest.log, verbatim.
    pub async fn server_logs(&self, world: String) -> Result<String> {
        let response = self
            .post()
            .header("type", "ServerLogs")
            .header("world", world)
            .send()
            .await?;
        handle_error!(response);
        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        Ok(body["content"].as_str().unwrap_or_default().to_string())
    }
}
