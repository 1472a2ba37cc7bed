//! Development record store
//!
//! Serves an in-memory `/students` collection for the admin client.
//!
//! ```text
//! student_store [config.yaml]
//! ```

use anyhow::Result;
use student_admin::config::AdminConfig;
use student_admin::logging;
use student_admin::server::ServerBuilder;
use student_admin::storage::InMemoryStudentStore;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => AdminConfig::from_yaml_file(&path)?,
        None => AdminConfig::default(),
    };

    ServerBuilder::new()
        .with_store(InMemoryStudentStore::new())
        .serve(&config.server.bind)
        .await
}
