use filedock::http::response::{Response, ResponseBuilder, StatusCode};
use filedock::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::LengthRequired.as_u16(), 411);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
    assert_eq!(StatusCode::LengthRequired.reason_phrase(), "Length Required");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_adds_nothing_implicitly() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("Hello, World!")
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.headers.is_empty());
    assert_eq!(response.body_bytes(), b"Hello, World!");
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-B", "2")
        .header("X-A", "1")
        .header("X-C", "3")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["X-B", "X-A", "X-C"]);
}

#[test]
fn test_response_builder_sized_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .sized_body("This is the body")
        .build();

    assert_eq!(response.header("Content-Length"), Some("16"));
    assert_eq!(response.headers[0].0, "Content-Type");
    assert_eq!(response.headers[1].0, "Content-Length");
}

#[test]
fn test_response_text_helper() {
    let response = Response::text("abc");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.header("Content-Length"), Some("3"));
    assert_eq!(response.body_bytes(), b"abc");
}

#[test]
fn test_response_status_helpers_have_no_body() {
    for response in [
        Response::not_found(),
        Response::bad_request(),
        Response::internal_error(),
        Response::status(StatusCode::MethodNotAllowed),
    ] {
        assert!(response.headers.is_empty());
        assert!(response.body.is_none());
    }
}

#[test]
fn test_serialize_bare_status() {
    let bytes = serialize_response(&Response::not_found());
    assert_eq!(bytes, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[test]
fn test_serialize_headers_and_body() {
    let bytes = serialize_response(&Response::text("abc"));
    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
    );
}

#[test]
fn test_serialize_binary_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .sized_body(vec![0u8, 1, 2, 255])
        .build();
    let bytes = serialize_response(&response);

    assert!(bytes.ends_with(&[b'\r', b'\n', b'\r', b'\n', 0, 1, 2, 255]));
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = Response::status(StatusCode::LengthRequired);
    let writer = ResponseWriter::new(&response);

    let mut out = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(out, serialize_response(&response));
    assert_eq!(out, b"HTTP/1.1 411 Length Required\r\n\r\n");
}
