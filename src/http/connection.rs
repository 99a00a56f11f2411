use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::parser::{ParseError, read_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::router::Router;

/// One client connection, serving exactly one request.
///
/// The stream is owned for the whole exchange and dropped (closed) when
/// `run` returns, whichever way it returns.
pub struct Connection<S> {
    stream: BufReader<S>,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream: BufReader::new(stream),
            router,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match read_request(&mut self.stream).await {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(ParseError::BadRequestLine(line)) => {
                            tracing::warn!(request_line = %line, "Rejecting malformed request line");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        Err(ParseError::Closed) => {
                            tracing::debug!("Client closed before sending a request");
                            ConnectionState::Closed
                        }
                        Err(e) => return Err(e).context("reading request"),
                    };
                }

                ConnectionState::Processing(req) => {
                    tracing::debug!(method = %req.method, path = %req.path, "Request received");

                    let response = self.router.dispatch(req, &mut self.stream).await;
                    tracing::debug!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("writing response")?;

                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!("Shutdown after response failed: {}", e);
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
