use std::net::TcpListener;

use actix_web::{web, App, HttpServer};

/// Runs a real server on an ephemeral port for the rest of the test and
/// answers its base URL.
pub async fn spawn_server<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind ephemeral port");
    let addr = server.addrs()[0];

    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// A local URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
