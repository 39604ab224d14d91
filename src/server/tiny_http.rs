//! tiny_http server adapter
//!
//! Converts between `tiny_http` requests/responses and the pure router's
//! [`RawRequest`]/[`Reply`], and runs the accept loop.

use std::collections::BTreeMap;
use std::sync::Arc;

use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use super::router::{self, RawRequest, Reply};
use crate::storage::EndpointStore;

/// Bind `addr` and serve requests until the process is stopped
pub fn serve(addr: &str, store: Arc<dyn EndpointStore>) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    log::info!("hooktrack v{} listening on http://{addr}", crate::VERSION);

    for mut request in server.incoming_requests() {
        let raw = read_request(&mut request);
        let reply = router::route(store.as_ref(), &raw);
        log::info!("{} {} -> {}", raw.method, raw.path, reply.status);
        if let Err(e) = request.respond(to_response(reply)) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}

/// Convert a `tiny_http` request into the router's transport-agnostic view
fn read_request(request: &mut Request) -> RawRequest {
    let method = method_name(request.method());
    let url = request.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (url, None),
    };

    let mut headers = BTreeMap::new();
    for header in request.headers() {
        headers.insert(
            header.field.to_string().to_ascii_lowercase(),
            header.value.to_string(),
        );
    }

    let mut body = String::new();
    let body = match request.as_reader().read_to_string(&mut body) {
        Ok(0) => None,
        Ok(_) => Some(body),
        Err(e) => {
            log::warn!("failed to read request body: {e}");
            None
        },
    };

    RawRequest {
        method,
        path,
        query,
        headers,
        body,
    }
}

fn method_name(method: &Method) -> String {
    match method {
        Method::Get => "GET".to_string(),
        Method::Head => "HEAD".to_string(),
        Method::Post => "POST".to_string(),
        Method::Put => "PUT".to_string(),
        Method::Delete => "DELETE".to_string(),
        Method::Connect => "CONNECT".to_string(),
        Method::Options => "OPTIONS".to_string(),
        Method::Trace => "TRACE".to_string(),
        Method::Patch => "PATCH".to_string(),
        Method::NonStandard(name) => name.as_str().to_ascii_uppercase(),
    }
}

fn to_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response =
        Response::from_data(reply.body).with_status_code(StatusCode(reply.status));
    for (name, value) in reply.headers {
        match Header::from_bytes(name.as_str(), value.as_str()) {
            Ok(header) => response.add_header(header),
            Err(()) => log::warn!("dropping unrepresentable header {name}"),
        }
    }
    response
}
