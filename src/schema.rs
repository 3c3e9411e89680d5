//! Database schema management for `sensorflow-fire-risk`.
//!
//! Ensures the assessment tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs`, and only when a database is
//! configured.

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// `fire_risk_assessments` keeps every scored reading; `station_risk_summary`
/// holds one rollup row per station. Safe to call on every startup.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fire_risk_assessments (
            id               UUID PRIMARY KEY,
            station_id       TEXT             NOT NULL,
            station_name     TEXT             NOT NULL,
            longitude        DOUBLE PRECISION NOT NULL,
            latitude         DOUBLE PRECISION NOT NULL,
            observed_at      TIMESTAMPTZ,
            assessed_at      TIMESTAMPTZ      NOT NULL DEFAULT now(),
            temperature      DOUBLE PRECISION,
            humidity         DOUBLE PRECISION,
            soil_moisture    DOUBLE PRECISION,
            wind_speed       DOUBLE PRECISION,
            wind_direction   DOUBLE PRECISION,
            smoke            DOUBLE PRECISION,
            co               DOUBLE PRECISION,
            fri              DOUBLE PRECISION NOT NULL,
            severity         TEXT             NOT NULL,
            action           TEXT             NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS station_risk_summary (
            station_id        TEXT PRIMARY KEY,
            avg_fri           DOUBLE PRECISION NOT NULL,
            max_fri           DOUBLE PRECISION NOT NULL,
            assessment_count  INTEGER          NOT NULL
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_fire_risk_assessments_station_id
            ON fire_risk_assessments (station_id);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_fire_risk_assessments_severity
            ON fire_risk_assessments (severity);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
