//! Opening a connection and applying its schema.

use std::path::Path;

use crate::Result;

/// Where a store keeps its table.
#[derive(Debug, Clone, Copy)]
pub enum Location<'a> {
  File(&'a Path),
  Memory,
}

/// Open a connection at `location` and run `schema` on it.
pub async fn connect(
  location: Location<'_>,
  schema: &'static str,
) -> Result<tokio_rusqlite::Connection> {
  let conn = match location {
    Location::File(path) => tokio_rusqlite::Connection::open(path).await?,
    Location::Memory => tokio_rusqlite::Connection::open_in_memory().await?,
  };

  conn
    .call(move |conn| {
      conn.execute_batch(schema)?;
      Ok(())
    })
    .await?;

  tracing::debug!(?location, "opened store");
  Ok(conn)
}
