//! Plain http endpoint.

use crate::config::Config;
use crate::message::{Query, Reply};
use crate::world::Worlds;
use http_body_util::{combinators::BoxBody, BodyExt, Empty, Full};
use hyper::server::conn::http1;
use hyper::{body::Bytes, service::service_fn, Method, Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::error::Error;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub type ResponseBody = BoxBody<Bytes, Infallible>;

pub struct Api {
    worlds: &'static Worlds,
    http_addr: SocketAddr,
}

/// Server endpoints.
impl Api {
    pub fn new(config: &Config, worlds: &'static Worlds) -> Api {
        Api {
            worlds,
            http_addr: config.http_addr,
        }
    }

    /// Serve plain http endpoint.
    pub async fn serve(&'static self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let listener = TcpListener::bind(self.http_addr).await?;
        info!("listening on {}", self.http_addr);
        loop {
            let (stream, _) = listener.accept().await?;
            let io = TokioIo::new(stream);
            tokio::task::spawn(async move {
                if let Err(err) = http1::Builder::new()
                    .serve_connection(io, service_fn(move |req| handle_http(req, self.worlds)))
                    .await
                {
                    warn!("error serving connection: {:?}", err);
                }
            });
        }
    }
}

async fn handle_http(
    req: Request<hyper::body::Incoming>,
    worlds: &'static Worlds,
) -> Result<Response<ResponseBody>, Infallible> {
    match *req.method() {
        // Ping server
        Method::GET => Ok(Response::new(full("PONG"))),
        // Everything has side effect, so this is POST-only.
        Method::POST => match Query::try_from(req) {
            Ok(query) => Ok(worlds
                .handle(query)
                .await
                .unwrap_or_else(|error| Reply::Error { error })
                .to_response()),
            Err(error) => Ok(Reply::Error { error }.to_response()),
        },
        _ => Ok(Reply::Error {
            error: crate::Error::ApiMethod,
        }
        .to_response()),
    }
}

// Utility functions to make Empty and Full bodies.

pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed()
}

pub fn full<T: Into<Bytes>>(chunk: T) -> ResponseBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}
