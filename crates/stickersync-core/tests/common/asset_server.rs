//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a mutable table of path → response, answers 404 for anything
//! unknown, and counts GETs per path so tests can assert how many downloads
//! a sync cycle performed.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

use stickersync_core::checksum::{digest, ChecksumAlgorithm};

#[derive(Default)]
struct State {
    routes: HashMap<String, (u16, Vec<u8>)>,
    hits: HashMap<String, usize>,
}

/// Handle to a running server. The server runs until the process exits.
#[derive(Clone)]
pub struct AssetServer {
    base: String,
    state: Arc<Mutex<State>>,
}

impl AssetServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let state = Arc::new(Mutex::new(State::default()));
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let state = Arc::clone(&shared);
                thread::spawn(move || handle(stream, &state));
            }
        });
        AssetServer {
            base: format!("http://127.0.0.1:{}", port),
            state,
        }
    }

    /// Base URL without trailing slash, e.g. `http://127.0.0.1:12345`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Serves `body` at `path` and its MD5 at `path.checksum.txt`.
    pub fn publish(&self, path: &str, body: &[u8]) {
        let md5 = digest(ChecksumAlgorithm::Md5, body);
        let mut st = self.state.lock().unwrap();
        st.routes.insert(path.to_string(), (200, body.to_vec()));
        st.routes.insert(
            format!("{}.checksum.txt", path),
            (200, format!("{}\n", md5).into_bytes()),
        );
    }

    /// Makes `path` answer with `status` and an empty body.
    pub fn fail(&self, path: &str, status: u16) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(path.to_string(), (status, Vec::new()));
    }

    /// Number of GETs received for `path`.
    pub fn hits(&self, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .hits
            .get(path)
            .copied()
            .unwrap_or(0)
    }
}

fn handle(mut stream: std::net::TcpStream, state: &Mutex<State>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let (status, body) = {
        let mut st = state.lock().unwrap();
        *st.hits.entry(path.clone()).or_insert(0) += 1;
        st.routes
            .get(&path)
            .cloned()
            .unwrap_or((404, Vec::new()))
    };
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&body);
}
