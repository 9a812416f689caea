//! Rebuilds `Paddle` aggregates from joined rows

use paddlex_core::model::{Metadata, Paddle, Performance, Shape, Specs};
use rusqlite::types::Type;
use rusqlite::Row;

/// Joined select across paddle, specs and performance.
///
/// Column order matches `paddle_from_row`.
pub const PADDLE_SELECT: &str = "
    SELECT p.paddle_id, p.brand, p.model, p.serial_code,
           s.shape, s.surface, s.average_weight, s.core, s.paddle_length,
           s.paddle_width, s.grip_length, s.grip_type, s.grip_circumference,
           f.power, f.pop, f.spin, f.twist_weight, f.swing_weight, f.balance_point
    FROM paddles p
    JOIN paddle_specs s ON s.paddle_id = p.id
    JOIN paddle_performance f ON f.paddle_spec_id = s.id";

pub fn paddle_from_row(row: &Row<'_>) -> rusqlite::Result<Paddle> {
    let shape: String = row.get(4)?;
    let shape: Shape = shape
        .parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Paddle {
        id: row.get(0)?,
        metadata: Metadata {
            brand: row.get(1)?,
            model: row.get(2)?,
            serial_code: row.get(3)?,
        },
        specs: Specs {
            shape,
            surface: row.get(5)?,
            average_weight: row.get(6)?,
            core: row.get(7)?,
            paddle_length: row.get(8)?,
            paddle_width: row.get(9)?,
            grip_length: row.get(10)?,
            grip_type: row.get(11)?,
            grip_circumference: row.get(12)?,
        },
        performance: Performance {
            power: row.get(13)?,
            pop: row.get(14)?,
            spin: row.get(15)?,
            twist_weight: row.get(16)?,
            swing_weight: row.get(17)?,
            balance_point: row.get(18)?,
        },
    })
}
