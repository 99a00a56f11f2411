//! Method and path dispatch
//!
//! Routing is a fixed table: the method decides between the GET and POST
//! tables, then the first matching path prefix picks the handler.

use std::sync::Arc;

use tokio::io::AsyncRead;

use crate::config::StorageConfig;
use crate::handlers::{files, text};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

const ECHO_PREFIX: &str = "/echo/";
const USER_AGENT_PREFIX: &str = "/user-agent";
const FILES_PREFIX: &str = "/files/";

/// The handler selected for a request, with the path text after the matched
/// prefix where the handler needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Homepage,
    Echo(String),
    UserAgent,
    Download(String),
    Upload(String),
    NotFound,
    MethodNotAllowed,
}

/// Resolves requests to handlers and runs them against the storage config.
#[derive(Debug, Clone)]
pub struct Router {
    storage: Arc<StorageConfig>,
}

impl Router {
    pub fn new(storage: impl Into<Arc<StorageConfig>>) -> Self {
        Self {
            storage: storage.into(),
        }
    }

    /// Picks the route for `method` and `path`.
    ///
    /// `/user-agent` is a prefix match, so `/user-agents/list` lands there too.
    pub fn resolve(method: &Method, path: &str) -> RouteTarget {
        match method {
            Method::GET => {
                if path == "/" {
                    RouteTarget::Homepage
                } else if let Some(message) = path.strip_prefix(ECHO_PREFIX) {
                    RouteTarget::Echo(message.to_string())
                } else if path.starts_with(USER_AGENT_PREFIX) {
                    RouteTarget::UserAgent
                } else if let Some(name) = path.strip_prefix(FILES_PREFIX) {
                    RouteTarget::Download(name.to_string())
                } else {
                    RouteTarget::NotFound
                }
            }
            Method::POST => match path.strip_prefix(FILES_PREFIX) {
                Some(name) => RouteTarget::Upload(name.to_string()),
                None => RouteTarget::NotFound,
            },
            _ => RouteTarget::MethodNotAllowed,
        }
    }

    /// Runs the handler for `req`. `body` is the connection reader, positioned
    /// after the header block; only uploads read from it.
    pub async fn dispatch<R>(&self, req: &Request, body: &mut R) -> Response
    where
        R: AsyncRead + Unpin,
    {
        let target = Self::resolve(&req.method, &req.path);
        tracing::debug!(?target, "Route resolved");

        match target {
            RouteTarget::Homepage => text::homepage(),
            RouteTarget::Echo(message) => text::echo(message),
            RouteTarget::UserAgent => text::user_agent(req),
            RouteTarget::Download(name) => files::download(&self.storage, &name).await,
            RouteTarget::Upload(name) => files::upload(&self.storage, &name, req, body).await,
            RouteTarget::NotFound => Response::not_found(),
            RouteTarget::MethodNotAllowed => Response::status(StatusCode::MethodNotAllowed),
        }
    }
}
