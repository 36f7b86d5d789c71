//! PostgreSQL-backed `SequenceAllocator` using the `ticket_seq` sequence.
//!
//! `nextval` is a single atomic increment-and-return inside PostgreSQL, so
//! concurrent callers never observe the same value and values survive
//! restarts. Values consumed by failed requests are not returned; the
//! resulting gaps are expected.

use async_trait::async_trait;
use diesel::sql_query;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SequenceAllocator, SequenceAllocatorError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::SequenceValueRow;
use super::pool::DbPool;

const NEXTVAL_SQL: &str = "SELECT nextval('ticket_seq') AS value";

/// Diesel-backed implementation of the sequence allocator port.
#[derive(Clone)]
pub struct DieselSequenceAllocator {
    pool: DbPool,
}

impl DieselSequenceAllocator {
    /// Create a new allocator with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn positive_sequence(value: i64) -> Result<u64, SequenceAllocatorError> {
    u64::try_from(value)
        .ok()
        .filter(|sequence| *sequence > 0)
        .ok_or_else(|| SequenceAllocatorError::invalid_value(value))
}

#[async_trait]
impl SequenceAllocator for DieselSequenceAllocator {
    async fn allocate_next(&self) -> Result<u64, SequenceAllocatorError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, SequenceAllocatorError::connection))?;

        let row = sql_query(NEXTVAL_SQL)
            .get_result::<SequenceValueRow>(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    SequenceAllocatorError::query,
                    SequenceAllocatorError::connection,
                )
            })?;

        positive_sequence(row.value)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 1)]
    #[case(1_000_000, 1_000_000)]
    #[case(i64::MAX, 9_223_372_036_854_775_807)]
    fn positive_values_pass_through(#[case] raw: i64, #[case] expected: u64) {
        assert_eq!(positive_sequence(raw), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn non_positive_values_are_rejected(#[case] raw: i64) {
        assert_eq!(
            positive_sequence(raw),
            Err(SequenceAllocatorError::invalid_value(raw))
        );
    }
}
