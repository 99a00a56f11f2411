use std::collections::HashMap;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::request::{Method, Request};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The peer closed the stream before a full request line arrived.
    #[error("connection closed before a request line was received")]
    Closed,
    /// The request line did not carry both a method and a path.
    #[error("malformed request line: {0:?}")]
    BadRequestLine(String),
    #[error("failed to read request line: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads one request line and the header block from `reader`.
///
/// On success the reader is left positioned on the first body byte, if any.
/// Header collection stops at the first blank line (`\r\n` or a bare `\n`),
/// at end-of-stream or at a read error; the latter two are not reported.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?.ok_or(ParseError::Closed)?;
    let (method, path, version) = parse_request_line(&line)?;

    let mut headers = HashMap::new();

    loop {
        let line = match read_line(reader).await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!("header read ended with error: {}", e);
                break;
            }
        };

        if is_blank(&line) {
            break;
        }

        if let Some((key, value)) = parse_header_line(&line) {
            headers.insert(key, value);
        }
    }

    Ok(Request {
        method,
        path,
        version,
        headers,
    })
}

/// Splits a request line on whitespace into method, path and optional version.
pub fn parse_request_line(line: &str) -> Result<(Method, String, Option<String>), ParseError> {
    let mut parts = line.split_whitespace();

    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return Err(ParseError::BadRequestLine(line.trim_end().to_string()));
    };

    Ok((
        Method::from(method),
        path.to_string(),
        parts.next().map(str::to_string),
    ))
}

/// Splits a header line on its first colon. Lines without a colon yield `None`.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

fn is_blank(line: &str) -> bool {
    line == "\r\n" || line == "\n"
}

/// Reads up to and including the next `\n`.
///
/// Returns `Ok(None)` when the stream ends before a terminator is seen, so a
/// trailing partial line is discarded.
async fn read_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;

    if buf.last() != Some(&b'\n') {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
