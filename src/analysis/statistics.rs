use std::collections::BTreeSet;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::SequenceId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("no values")]
    Empty,
    #[error("sum of [{0}] and [{1}] overflowed")]
    Overflow(Decimal, Decimal)
}

/// Median of `values`, averaging the two middle elements for even counts.
///
/// Sorts `values` in place.
pub fn median(values: &mut [Decimal]) -> Result<Decimal, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::Empty);
    }

    values.sort_unstable();
    let middle = values.len() / 2;

    if values.len() % 2 == 1 {
        return Ok(values[middle]);
    }

    let (lower, upper) = (values[middle - 1], values[middle]);

    lower.checked_add(upper)
        .map(|sum| sum / Decimal::TWO)
        .ok_or(StatisticsError::Overflow(lower, upper))
}

/// Zero-based dense rank in ascending order: ties share a rank and ranks
/// have no gaps.
pub fn dense_rank<T: Ord>(values: &[T]) -> Vec<SequenceId> {
    let distinct: Vec<&T> = values.iter().collect::<BTreeSet<_>>().into_iter().collect();

    values.iter()
        .map(|value| {
            // distinct is sorted and always contains value
            distinct.binary_search(&value).unwrap_or_default() as SequenceId
        })
        .collect()
}

/// `hits / gaps`, undefined when there are no gaps.
pub fn ratio(hits: usize, gaps: usize) -> Option<f64> {
    if gaps == 0 {
        return None;
    }

    Some(hits as f64 / gaps as f64)
}
