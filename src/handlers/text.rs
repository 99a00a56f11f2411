use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub const GREETING: &str = "Welcome to the homepage!";

/// Fixed greeting. No Content-Length; the close delimits the body.
pub fn homepage() -> Response {
    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(GREETING)
        .build()
}

pub fn echo(message: String) -> Response {
    Response::text(message)
}

/// Reflects the `User-Agent` header, empty when the client sent none.
pub fn user_agent(req: &Request) -> Response {
    Response::text(req.user_agent().to_string())
}
