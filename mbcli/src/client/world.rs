use super::{get_header, pretty, Client, Result};
use crate::handle_error;

impl Client {
    /// Create a world, returning its id and version.
    pub async fn world_create(&self, name: String, version: Option<String>) -> Result<String> {
        let mut builder = self
            .post()
            .header("type", "WorldCreate")
            .header("name", name);
        if let Some(version) = version {
            builder = builder.header("version", version);
        }
        let response = builder.send().await?;
        handle_error!(response);
        Ok(response.text().await?)
    }

    /// List every world on the instance.
    pub async fn world_list(&self) -> Result<String> {
        let response = self.post().header("type", "WorldList").send().await?;
        handle_error!(response);
        pretty(&response.text().await?)
    }
}
