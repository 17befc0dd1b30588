//! Persistence gateway for the `gemini_request_info` table.
//!
//! Each operation opens its own short-lived MySQL connection and closes it
//! before returning. Rows are append-only; there is no update or delete path.

use crate::config::DbSettings;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use tracing::info;

/// Fixed category code for travel-plan requests
pub const TRAVEL_PLAN_KIND: i32 = 10;

/// Storage for request records
///
/// The pipeline and rate limiter talk to the request log through this trait;
/// production uses [`MySqlRequestLog`].
#[allow(async_fn_in_trait)]
pub trait RequestLog {
    /// Insert one request record. The creation timestamp is storage-assigned.
    async fn insert_request(&self, prompt: &str) -> Result<(), sqlx::Error>;

    /// Count request records created within the trailing window.
    async fn count_recent_requests(&self, window_seconds: u64) -> Result<i64, sqlx::Error>;
}

/// MySQL-backed request log
#[derive(Clone)]
pub struct MySqlRequestLog {
    db: DbSettings,
}

impl MySqlRequestLog {
    pub fn new(db: DbSettings) -> Self {
        Self { db }
    }

    async fn open_connection(&self) -> Result<MySqlConnection, sqlx::Error> {
        let options = MySqlConnectOptions::new()
            .host(&self.db.host)
            .port(self.db.port)
            .username(&self.db.user)
            .password(&self.db.password)
            .database(&self.db.database);

        MySqlConnection::connect_with(&options).await
    }
}

impl RequestLog for MySqlRequestLog {
    async fn insert_request(&self, prompt: &str) -> Result<(), sqlx::Error> {
        info!("registering request record");

        let mut conn = self.open_connection().await?;

        sqlx::query("INSERT INTO gemini_request_info ( request_prompt, kind ) VALUES ( ?, ? )")
            .bind(prompt)
            .bind(TRAVEL_PLAN_KIND)
            .execute(&mut conn)
            .await?;

        conn.close().await?;

        info!("request record registered");
        Ok(())
    }

    async fn count_recent_requests(&self, window_seconds: u64) -> Result<i64, sqlx::Error> {
        let mut conn = self.open_connection().await?;

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM gemini_request_info WHERE create_date >= NOW() - INTERVAL ? SECOND",
        )
        .bind(window_seconds as i64)
        .fetch_one(&mut conn)
        .await?;

        conn.close().await?;

        info!(count, "trailing-window request count");
        Ok(count)
    }
}
