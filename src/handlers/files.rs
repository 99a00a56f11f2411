//! File download and upload under the storage directory
//!
//! Filenames come straight from the request path. Anything that would leave
//! the storage directory (`..`, an absolute path) is refused before the
//! filesystem is touched.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::config::StorageConfig;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub const UPLOAD_CONFIRMATION: &str = "File created successfully";

/// Joins `name` onto `dir`, or `None` if `name` could escape `dir`.
///
/// # Example
///
/// ```
/// # use std::path::Path;
/// # use filedock::handlers::files::resolve;
/// assert_eq!(resolve(Path::new("/srv"), "a/b.txt"), Some(Path::new("/srv/a/b.txt").to_path_buf()));
/// assert_eq!(resolve(Path::new("/srv"), "../etc/passwd"), None);
/// ```
pub fn resolve(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);
    let contained = candidate
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    contained.then(|| dir.join(candidate))
}

/// Reads the whole file. Missing, unreadable or refused names all give 404.
pub async fn download(storage: &StorageConfig, name: &str) -> Response {
    let Some(path) = resolve(&storage.directory, name) else {
        tracing::warn!(file = name, "Refusing download outside storage directory");
        return Response::not_found();
    };

    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) => {
            if e.kind() == ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), "Requested file does not exist");
            } else {
                tracing::warn!(path = %path.display(), "Failed to read file: {}", e);
            }
            return Response::not_found();
        }
    };

    let content_type = if storage.detect_content_type {
        mime::content_type_for(&path)
    } else {
        mime::OCTET_STREAM
    };

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", content_type)
        .sized_body(data)
        .build()
}

/// Stores exactly `Content-Length` bytes read from `body` as `name`.
pub async fn upload<R>(storage: &StorageConfig, name: &str, req: &Request, body: &mut R) -> Response
where
    R: AsyncRead + Unpin,
{
    let Some(length) = req.header("Content-Length").filter(|v| !v.is_empty()) else {
        return Response::status(StatusCode::LengthRequired);
    };

    let length = match length.parse::<u64>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(content_length = length, "Invalid Content-Length on upload");
            return Response::bad_request();
        }
    };

    let Some(path) = resolve(&storage.directory, name) else {
        tracing::warn!(file = name, "Refusing upload outside storage directory");
        return Response::bad_request();
    };

    let data = match read_body(body, length).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(expected = length, "Failed to read upload body: {}", e);
            return Response::internal_error();
        }
    };

    if let Err(e) = write_file(&path, &data).await {
        tracing::warn!(path = %path.display(), "Failed to store upload: {}", e);
        return Response::internal_error();
    }

    tracing::info!(path = %path.display(), bytes = data.len(), "Stored upload");

    ResponseBuilder::new(StatusCode::Created)
        .header("Content-Type", "text/plain")
        .body(UPLOAD_CONFIRMATION)
        .build()
}

/// Reads exactly `length` bytes; ending early is an `UnexpectedEof` error.
async fn read_body<R>(body: &mut R, length: u64) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut data = Vec::new();
    let n = (&mut *body).take(length).read_to_end(&mut data).await?;

    if (n as u64) < length {
        return Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            format!("body ended after {} of {} bytes", n, length),
        ));
    }

    Ok(data)
}

/// Creates or truncates `path` (mode 0644 on unix) and writes `data`.
async fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);

    let mut file = options.open(path).await?;
    file.write_all(data).await?;
    file.flush().await
}
