//! Shared fixtures for integration tests
//!
//! - [`ScriptedStore`]: wraps the in-memory store, records every call and
//!   fails chosen operations with a network error
//! - [`spawn_server`]: serves a store on an ephemeral port for HTTP tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use student_admin::core::error::Result;
use student_admin::prelude::*;

pub fn fields(firstname: &str, lastname: &str, group: Group) -> StudentFields {
    StudentFields {
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        group,
    }
}

pub fn ann() -> StudentRecord {
    StudentRecord::new("1", fields("Ann", "Lee", Group::A1))
}

pub fn session() -> Session {
    SessionGate::default()
        .authenticate("admin", "password")
        .expect("admin credentials are accepted")
}

pub fn grant(_: &ConfirmPrompt) -> bool {
    true
}

pub fn decline(_: &ConfirmPrompt) -> bool {
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory store with call recording and scripted failures
#[derive(Clone, Default)]
pub struct ScriptedStore {
    pub inner: InMemoryStudentStore,
    calls: Arc<Mutex<Vec<Op>>>,
    failing: Arc<Mutex<HashSet<Op>>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = StudentRecord>) -> Self {
        Self {
            inner: InMemoryStudentStore::with_records(records),
            ..Self::default()
        }
    }

    /// Make every future call of `op` fail with a network error
    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls().into_iter().filter(|c| *c == op).count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn enter(&self, op: Op) -> Result<()> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(RemoteError::Network {
                message: "connection refused".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl StudentStore for ScriptedStore {
    async fn list(&self) -> Result<Vec<StudentRecord>> {
        self.enter(Op::List)?;
        self.inner.list().await
    }

    async fn get(&self, id: &StudentId) -> Result<StudentRecord> {
        self.enter(Op::Get)?;
        self.inner.get(id).await
    }

    async fn create(&self, fields: &StudentFields) -> Result<StudentRecord> {
        self.enter(Op::Create)?;
        self.inner.create(fields).await
    }

    async fn update(&self, id: &StudentId, fields: &StudentFields) -> Result<StudentRecord> {
        self.enter(Op::Update)?;
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: &StudentId) -> Result<()> {
        self.enter(Op::Delete)?;
        self.inner.delete(id).await
    }
}

/// Mounted manager over a scripted store
pub async fn mounted(store: &ScriptedStore) -> RecordManager<ScriptedStore> {
    let mut manager = RecordManager::new(store.clone(), session());
    manager.mount().await.expect("initial fetch succeeds");
    store.clear_calls();
    manager
}

/// Serve `store` on 127.0.0.1 with an ephemeral port and return its base URL
pub async fn spawn_server(store: impl StudentStore + 'static) -> String {
    let app = ServerBuilder::new()
        .with_store(store)
        .build()
        .expect("router builds");
    spawn_router(app).await
}

pub async fn spawn_router(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });
    format!("http://{}", addr)
}

/// HTTP transport for a base URL returned by the spawn helpers
pub fn http_store(base_url: impl AsRef<str>) -> HttpStudentStore {
    HttpStudentStore::new(base_url.as_ref()).expect("valid base url")
}

/// A base URL nothing listens on
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
