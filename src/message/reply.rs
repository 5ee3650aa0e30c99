use super::Id;
use crate::api::{empty, full, ResponseBody};
use crate::error::Error;
use crate::navigator::View;
use crate::registry::WorldRecord;
use hyper::Response;
use serde_json::json;

pub enum Reply {
    Error { error: Error },
    WorldCreate { world: Id, version: String },
    WorldList { worlds: Vec<WorldRecord> },
    FsNavigate { view: View },
    FsWrite,
    PropsGet { value: String },
    PropsSet,
    ServerStart,
    ServerStop,
    ServerStatus { running: bool },
    ServerCommand,
    ServerLogs { content: String },
}

impl Reply {
    pub fn to_response(self) -> Response<ResponseBody> {
        // Safe to unwrap here. Builders are infallible.
        match self {
            Reply::Error { error } => Response::builder()
                .header("type", "Error")
                .header("error", error.to_string())
                .status(error.status())
                .body(full(
                    json!({ "error": error.to_string(), "message": error.message() }).to_string(),
                ))
                .unwrap(),
            Reply::WorldCreate { world, version } => Response::builder()
                .header("type", "WorldCreate")
                .body(full(
                    json!({ "world": world, "version": version }).to_string(),
                ))
                .unwrap(),
            Reply::WorldList { worlds } => Response::builder()
                .header("type", "WorldList")
                .body(full(json!({ "worlds": worlds }).to_string()))
                .unwrap(),
            Reply::FsNavigate { view } => Response::builder()
                .header("type", "FsNavigate")
                .body(full(serde_json::to_string(&view).unwrap()))
                .unwrap(),
            Reply::FsWrite => Response::builder()
                .header("type", "FsWrite")
                .body(empty())
                .unwrap(),
            Reply::PropsGet { value } => Response::builder()
                .header("type", "PropsGet")
                .body(full(json!({ "value": value }).to_string()))
                .unwrap(),
            Reply::PropsSet => Response::builder()
                .header("type", "PropsSet")
                .body(empty())
                .unwrap(),
            Reply::ServerStart => Response::builder()
                .header("type", "ServerStart")
                .body(empty())
                .unwrap(),
            Reply::ServerStop => Response::builder()
                .header("type", "ServerStop")
                .body(empty())
                .unwrap(),
            Reply::ServerStatus { running } => Response::builder()
                .header("type", "ServerStatus")
                .body(full(json!({ "running": running }).to_string()))
                .unwrap(),
            Reply::ServerCommand => Response::builder()
                .header("type", "ServerCommand")
                .body(empty())
                .unwrap(),
            Reply::ServerLogs { content } => Response::builder()
                .header("type", "ServerLogs")
                .body(full(json!({ "content": content }).to_string()))
                .unwrap(),
        }
    }
}
