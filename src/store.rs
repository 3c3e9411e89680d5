//! Postgres persistence of assessments.

use sqlx::PgPool;
use uuid::Uuid;

use crate::assessment::StationAssessment;

// ---

/// Insert one assessment and return its row id.
pub async fn store_assessment(
    pool: &PgPool,
    assessment: &StationAssessment,
) -> Result<Uuid, sqlx::Error> {
    // ---
    let id = Uuid::new_v4();
    let reading = &assessment.reading;

    sqlx::query(
        r#"
        INSERT INTO fire_risk_assessments (
            id, station_id, station_name, longitude, latitude, observed_at,
            temperature, humidity, soil_moisture, wind_speed, wind_direction,
            smoke, co, fri, severity, action
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        "#,
    )
    .bind(id)
    .bind(&reading.station_id)
    .bind(&reading.name)
    .bind(reading.position.longitude)
    .bind(reading.position.latitude)
    .bind(reading.observed_at)
    .bind(reading.temperature)
    .bind(reading.humidity)
    .bind(reading.soil_moisture)
    .bind(reading.wind_speed)
    .bind(reading.wind_direction)
    .bind(reading.smoke)
    .bind(reading.co)
    .bind(assessment.score.composite)
    .bind(assessment.alert.severity.as_str())
    .bind(assessment.alert.action.as_str())
    .execute(pool)
    .await?;

    Ok(id)
}

/// Recompute the per-station rollup from all stored assessments.
pub async fn update_station_summaries(pool: &PgPool) -> Result<(), sqlx::Error> {
    // ---
    sqlx::query(
        r#"
        INSERT INTO station_risk_summary (station_id, avg_fri, max_fri, assessment_count)
        SELECT
            station_id,
            AVG(fri) AS avg_fri,
            MAX(fri) AS max_fri,
            COUNT(*) AS assessment_count
        FROM fire_risk_assessments
        GROUP BY station_id
        ON CONFLICT (station_id) DO UPDATE SET
            avg_fri = EXCLUDED.avg_fri,
            max_fri = EXCLUDED.max_fri,
            assessment_count = EXCLUDED.assessment_count
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
