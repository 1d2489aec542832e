//! curl-backed [`Transport`]: single blocking GET, body streamed to the sink.

use std::io;
use std::str;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{FetchError, Transport};

/// Expected status for a successful download; anything else is reported as
/// [`FetchError::NonOkStatus`] with no body bytes written.
const STATUS_OK: u32 = 200;

/// HTTP transport using one `curl::easy::Easy` handle per request.
///
/// Follows redirects; the status check applies to the final response. No
/// custom headers, no wall-clock timeout on the transfer itself (batch runs
/// are allowed to take as long as the slowest file).
pub struct HttpTransport;

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, out: &mut dyn io::Write) -> Result<u64, FetchError> {
        let bytes_written = Arc::new(AtomicU64::new(0));
        // Status of the most recent response line seen by the header
        // callback. Redirect hops overwrite it, so after perform() it holds
        // the final status and the write callback only ever passes body
        // bytes through for a 200.
        let status = Arc::new(AtomicU32::new(0));
        let sink_error: Arc<Mutex<Option<io::Error>>> = Arc::new(Mutex::new(None));

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(FetchError::Request)?;
        easy.follow_location(true).map_err(FetchError::Request)?;
        easy.max_redirections(10).map_err(FetchError::Request)?;
        easy.connect_timeout(Duration::from_secs(30))
            .map_err(FetchError::Request)?;

        {
            let status_hdr = Arc::clone(&status);
            let status_body = Arc::clone(&status);
            let bytes = Arc::clone(&bytes_written);
            let sink_error_cb = Arc::clone(&sink_error);

            let mut transfer = easy.transfer();
            transfer
                .header_function(move |line| {
                    if let Some(code) = parse_status_line(line) {
                        status_hdr.store(code, Ordering::Relaxed);
                    }
                    true
                })
                .map_err(FetchError::Request)?;
            transfer
                .write_function(move |data| {
                    // Error bodies (404 pages and the like) reach this
                    // callback too; swallow them so the file stays empty.
                    if status_body.load(Ordering::Relaxed) != STATUS_OK {
                        return Ok(data.len());
                    }
                    match out.write_all(data) {
                        Ok(()) => {
                            bytes.fetch_add(data.len() as u64, Ordering::Relaxed);
                            Ok(data.len())
                        }
                        Err(e) => {
                            let _ = sink_error_cb.lock().unwrap().replace(e);
                            Ok(0) // abort transfer
                        }
                    }
                })
                .map_err(FetchError::Request)?;
            if let Err(e) = transfer.perform() {
                if e.is_write_error() {
                    if let Some(io_err) = sink_error.lock().unwrap().take() {
                        return Err(FetchError::Write(io_err));
                    }
                }
                return Err(FetchError::Request(e));
            }
        }

        let code = easy.response_code().map_err(FetchError::Request)? as u32;
        if code != STATUS_OK {
            return Err(FetchError::NonOkStatus(code));
        }
        Ok(bytes_written.load(Ordering::Relaxed))
    }
}

/// Parses the status code out of an HTTP status line (`HTTP/1.1 200 OK`).
/// Returns `None` for ordinary header lines.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let text = str::from_utf8(line).ok()?;
    if !text.starts_with("HTTP/") {
        return None;
    }
    text.split_whitespace().nth(1)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_line_variants() {
        assert_eq!(parse_status_line(b"HTTP/1.1 200 OK\r\n"), Some(200));
        assert_eq!(parse_status_line(b"HTTP/1.1 404 Not Found\r\n"), Some(404));
        assert_eq!(parse_status_line(b"HTTP/2 301\r\n"), Some(301));
        assert_eq!(parse_status_line(b"Content-Length: 42\r\n"), None);
        assert_eq!(parse_status_line(b"\r\n"), None);
    }
}
