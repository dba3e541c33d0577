//! Shared HTTP agent and size-capped body reads for the analyze client.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared agent. The overall deadline is set per request by the caller.
pub(crate) fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .build()
    })
}

/// Read the whole body, failing once it passes `max_bytes`.
///
/// A declared `Content-Length` above the cap fails before any body is read.
pub(crate) fn read_response_bytes(
    response: ureq::Response,
    max_bytes: usize,
) -> Result<Vec<u8>, io::Error> {
    if let Some(declared) = declared_length(&response)
        && declared > max_bytes as u64
    {
        return Err(too_large(format!(
            "server announced {declared} bytes, limit is {max_bytes}"
        )));
    }
    let mut body = Vec::new();
    response
        .into_reader()
        .take(max_bytes as u64 + 1)
        .read_to_end(&mut body)?;
    if body.len() > max_bytes {
        return Err(too_large(format!("body exceeded {max_bytes} bytes")));
    }
    Ok(body)
}

/// Body of a failed response as text for the inline error. Empty when unreadable.
pub(crate) fn read_response_text(response: ureq::Response, max_bytes: usize) -> String {
    read_response_bytes(response, max_bytes)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_else(|err| {
            tracing::debug!("Dropping unreadable error body: {err}");
            String::new()
        })
}

fn declared_length(response: &ureq::Response) -> Option<u64> {
    response.header("Content-Length")?.trim().parse().ok()
}

fn too_large(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis_api::{MAX_ERROR_BODY_BYTES, MAX_PAYLOAD_BYTES};
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;

    /// Answer a single request with `raw` and return the base URL.
    fn respond_with(raw: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(&raw);
            }
        });
        format!("http://{addr}")
    }

    fn post(url: &str) -> Result<ureq::Response, ureq::Error> {
        agent().post(&format!("{url}/analyze")).call()
    }

    #[test]
    fn payload_with_announced_size_over_limit_is_refused() {
        let raw = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{{}}",
            MAX_PAYLOAD_BYTES + 1
        );
        let response = post(&respond_with(raw.into_bytes())).unwrap();
        let err = read_response_bytes(response, MAX_PAYLOAD_BYTES).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn payload_within_limit_is_returned_whole() {
        let body = r#"{"video_id":"abc","total_comments":2}"#;
        let raw = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        let response = post(&respond_with(raw.into_bytes())).unwrap();
        let bytes = read_response_bytes(response, MAX_PAYLOAD_BYTES).unwrap();
        assert_eq!(bytes, body.as_bytes());
    }

    #[test]
    fn oversized_error_body_reads_as_empty_text() {
        let body = "x".repeat(MAX_ERROR_BODY_BYTES + 1);
        let raw = format!("HTTP/1.0 500 Internal Server Error\r\n\r\n{body}");
        let Err(ureq::Error::Status(500, response)) = post(&respond_with(raw.into_bytes())) else {
            panic!("expected HTTP 500");
        };
        assert_eq!(read_response_text(response, MAX_ERROR_BODY_BYTES), "");
    }

    #[test]
    fn error_body_with_invalid_utf8_is_kept_lossily() {
        let mut raw = b"HTTP/1.1 422 Unprocessable Entity\r\nContent-Length: 9\r\n\r\nbad \xff ".to_vec();
        raw.extend_from_slice(b"url");
        let Err(ureq::Error::Status(422, response)) = post(&respond_with(raw)) else {
            panic!("expected HTTP 422");
        };
        assert_eq!(
            read_response_text(response, MAX_ERROR_BODY_BYTES),
            "bad \u{fffd} url"
        );
    }
}
