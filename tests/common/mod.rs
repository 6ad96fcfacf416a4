//! Recording mock transport shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use telegraph_rs::{Params, Result, Transport, UploadFile, Uploader};
use tracing_subscriber::fmt::MakeWriter;

/// One recorded API call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub params: Params,
}

/// Transport that replays canned response bodies and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Vec<u8>>>,
    calls: Mutex<Vec<RecordedCall>>,
    uploads: Mutex<Vec<Vec<UploadFile>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body
    pub fn respond(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(body.as_bytes().to_vec());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().last().cloned().expect("no calls recorded")
    }

    pub fn uploads(&self) -> Vec<Vec<UploadFile>> {
        self.uploads.lock().unwrap().clone()
    }

    fn next_response(&self) -> Vec<u8> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response left")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(&self, method: &str, params: &Params) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            params: params.clone(),
        });
        Ok(self.next_response())
    }
}

#[async_trait]
impl Uploader for MockTransport {
    async fn upload_files(&self, files: &[UploadFile]) -> Result<Vec<u8>> {
        self.uploads.lock().unwrap().push(files.to_vec());
        Ok(self.next_response())
    }
}

/// In-memory log sink for asserting on emitted tracing events
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Route INFO and above on the current thread into this buffer
    pub fn capture(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
