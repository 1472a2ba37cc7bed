//! Client-side transports for the remote record store

pub mod http;

pub use http::HttpStudentStore;
