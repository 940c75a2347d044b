// Stub bootstrap endpoint

use std::net::{SocketAddr, TcpListener};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};

#[derive(Clone)]
struct StubResponse {
    status: u16,
    body: String,
}

/// Session cookie set by every stub response, like the real server's
/// signed session.
pub const SESSION_COOKIE: &str = "session=stub-session";

async fn respond(stub: web::Data<StubResponse>) -> HttpResponse {
    let status = StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .insert_header(("Set-Cookie", format!("{SESSION_COOKIE}; Path=/; HttpOnly")))
        .body(stub.body.clone())
}

/// Start an HTTP server on a random port answering `GET {path}` with a
/// fixed status and body, plus `SESSION_COOKIE`.
///
/// Returns (server_handle, socket_addr, join_handle), same as the real
/// server's test harness.
pub async fn start_stub_http(
    path: &str,
    status: u16,
    body: String,
) -> Result<
    (
        actix_web::dev::ServerHandle,
        SocketAddr,
        tokio::task::JoinHandle<Result<(), std::io::Error>>,
    ),
    Box<dyn std::error::Error>,
> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let stub = web::Data::new(StubResponse { status, body });
    let path = path.to_string();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(stub.clone())
            .route(&path, web::get().to(respond))
    })
    .workers(1)
    .listen(listener)?
    .run();

    let server_handle = server.handle();
    let join = tokio::spawn(server);

    Ok((server_handle, addr, join))
}
