mod fs;
mod props;
mod server;
mod world;

use crate::config::Config;
use crate::Result;
use reqwest::{get, Client as ReqwestClient, RequestBuilder, Response};

#[macro_use]
mod macros {
    /// If response is error type, print error kind and detail, then exit.
    #[macro_export]
    macro_rules! handle_error {
        ($response:expr) => {
            if get_header(&$response, "type") == "Error" {
                let kind = get_header(&$response, "error");
                let body = $response.text().await.unwrap_or_default();
                let detail = serde_json::from_str::<serde_json::Value>(&body)
                    .ok()
                    .and_then(|v| v["message"].as_str().map(String::from))
                    .unwrap_or(body);
                eprintln!("{}: {}", kind, detail);
                std::process::exit(1);
            }
        };
    }
}

/// Client state struct.
pub struct Client {
    pub config: Config,
}

impl Client {
    /// Check connectivity.
    pub async fn ping(&self) -> Result<String> {
        Ok(get(&self.config.url).await?.text().await?)
    }

    /// The http POST method.
    fn post(&self) -> RequestBuilder {
        ReqwestClient::new().post(&self.config.url)
    }
}

impl Client {
    /// A client with the stock config, not the saved one.
    pub fn zero() -> Self {
        Client {
            config: Config::default(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Client {
            config: Config::load(),
        }
    }
}

/// Get header's value by key.
fn get_header(response: &Response, key: &str) -> String {
    response.headers()[key]
        .to_str()
        .unwrap_or_default()
        .to_string()
}

/// Re-indent a JSON reply for the terminal.
fn pretty(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
