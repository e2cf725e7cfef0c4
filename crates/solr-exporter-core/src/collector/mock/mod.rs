//! In-memory Solr for testing collectors without a running server.
//!
//! `MockTransport` maps URLs to canned responses; `scenarios` provides
//! payloads captured from several Solr generations.

mod transport;

pub mod scenarios;

pub use transport::{MockResponse, MockTransport};
