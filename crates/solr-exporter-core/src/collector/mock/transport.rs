//! URL-keyed mock transport.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use crate::collector::traits::{FetchError, Transport};

/// Canned answer for one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// 200 with this body.
    Body(Vec<u8>),
    /// Non-2xx status.
    Status(u16),
    /// Transport failure (refused, timed out).
    Fail(String),
}

/// Transport serving canned responses.
///
/// Unknown URLs answer 404. Every requested URL is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, MockResponse>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.responses_mut()
            .insert(url.into(), MockResponse::Body(body.into()));
    }

    pub fn add_status(&mut self, url: impl Into<String>, status: u16) {
        self.responses_mut()
            .insert(url.into(), MockResponse::Status(status));
    }

    pub fn add_failure(&mut self, url: impl Into<String>, message: impl Into<String>) {
        self.responses_mut()
            .insert(url.into(), MockResponse::Fail(message.into()));
    }

    /// Swaps a body while the transport is shared with a collector.
    pub fn replace_body(&self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        responses.insert(url.into(), MockResponse::Body(body.into()));
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Loads responses from a directory of captured payloads.
    ///
    /// Layout, all files optional:
    /// - `cores.json`: core status
    /// - `jvm.json`, `metrics.json`: metrics registries
    /// - `<core>/mbeans.json`, `<core>/ping.json`: per-core endpoints
    pub fn from_dir(dir: impl AsRef<Path>, base_url: &str) -> io::Result<Self> {
        use crate::collector::{ADMIN_CORES_PATH, JVM_PATH, MBEANS_PATH, METRICS_PATH, PING_PATH};

        let dir = dir.as_ref();
        let mut transport = Self::new();
        for (file, path) in [
            ("cores.json", ADMIN_CORES_PATH),
            ("jvm.json", JVM_PATH),
            ("metrics.json", METRICS_PATH),
        ] {
            let file = dir.join(file);
            if file.is_file() {
                transport.add_body(format!("{}{}", base_url, path), fs::read(file)?);
            }
        }
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let core = entry.file_name().to_string_lossy().into_owned();
            for (file, path) in [("mbeans.json", MBEANS_PATH), ("ping.json", PING_PATH)] {
                let file = entry.path().join(file);
                if file.is_file() {
                    transport.add_body(format!("{}/{}{}", base_url, core, path), fs::read(file)?);
                }
            }
        }
        Ok(transport)
    }

    fn responses_mut(&mut self) -> &mut HashMap<String, MockResponse> {
        self.responses
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(url.to_string());
        let response = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(url)
            .cloned();
        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(MockResponse::Fail(message)) => Err(FetchError::Request {
                url: url.to_string(),
                message,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}
