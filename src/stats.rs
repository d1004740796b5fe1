use crate::error::{ReportError, Result};
use crate::structs::Extremum;
use std::cmp::Ordering;

/// Calculates the arithmetic mean of a sequence of values.
///
/// # Arguments
/// * `values` - Slice of readings to average
///
/// # Returns
/// Returns the sum of all values divided by their count.
///
/// # Errors
/// Returns `ReportError::EmptyInput` if `values` is empty.
pub fn calculate_mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ReportError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Finds the minimum value and its position.
///
/// When the minimum occurs more than once the index of the *last* occurrence is returned,
/// so `[5, 3, 3, 8]` yields `Found { value: 3.0, index: 2 }`.
pub fn find_min(values: &[f64]) -> Extremum {
    find_last_extremum(values, Ordering::Less)
}

/// Finds the maximum value and the position of its last occurrence.
pub fn find_max(values: &[f64]) -> Extremum {
    find_last_extremum(values, Ordering::Greater)
}

/// Scans left to right, letting ties overwrite the current best so the last index wins.
fn find_last_extremum(values: &[f64], wanted: Ordering) -> Extremum {
    let mut best: Option<(f64, usize)> = None;
    for (index, &value) in values.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((current, _)) => matches!(
                value.partial_cmp(&current),
                Some(ord) if ord == wanted || ord == Ordering::Equal
            ),
        };
        if replace {
            best = Some((value, index));
        }
    }

    match best {
        Some((value, index)) => Extremum::Found { value, index },
        None => Extremum::Empty,
    }
}
