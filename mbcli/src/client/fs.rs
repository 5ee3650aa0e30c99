use super::{get_header, pretty, Client, Result};
use crate::handle_error;
use bytes::Bytes;
use std::fs::File;
use std::io::Read;

impl Client {
    async fn navigate(
        &self,
        world: String,
        path: String,
        target: String,
        action: &str,
        kind: &str,
    ) -> Result<String> {
        let response = self
            .post()
            .header("type", "FsNavigate")
            .header("world", world)
            .header("path", path)
            .header("target", target)
            .header("action", action)
            .header("kind", kind)
            .send()
            .await?;
        handle_error!(response);
        Ok(response.text().await?)
    }

    /// The first listing of a world.
    pub async fn fs_ls(&self, world: String) -> Result<String> {
        pretty(&self.navigate(world, String::new(), String::new(), "initial", "folder").await?)
    }

    /// List the folder TARGET under CURRENT.
    pub async fn fs_enter(&self, world: String, current: String, target: String) -> Result<String> {
        pretty(&self.navigate(world, current, target, "enter", "folder").await?)
    }

    /// List the parent of CURRENT.
    pub async fn fs_up(&self, world: String, current: String) -> Result<String> {
        pretty(&self.navigate(world, current, String::new(), "up", "folder").await?)
    }

    /// Print the file TARGET under CURRENT.
    pub async fn fs_cat(&self, world: String, current: String, target: String) -> Result<String> {
        let body = self.navigate(world, current, target, "enter", "file").await?;
        let view: serde_json::Value = serde_json::from_str(&body)?;
        match view["content"].as_str() {
            Some(content) => Ok(content.to_string()),
            None => Ok(body),
        }
    }

    /// Upload bytes as the new content of PATH.
    pub async fn fs_write_bytes(&self, world: String, path: String, bytes: Bytes) -> Result<String> {
        let response = self
            .post()
            .header("type", "FsWrite")
            .header("world", world)
            .header("path", path)
            .body(bytes)
            .send()
            .await?;
        handle_error!(response);
        Ok("written".into())
    }

    /// Upload a file, or stdin without one.
    pub async fn fs_write(
        &self,
        world: String,
        path: String,
        file: Option<String>,
    ) -> Result<String> {
        let mut buf = Vec::<u8>::new();
        match file {
            Some(file) => {
                File::open(file)?.read_to_end(&mut buf)?;
            }
            None => {
                std::io::stdin().read_to_end(&mut buf)?;
            }
        }
        self.fs_write_bytes(world, path, buf.into()).await
    }
}
