use crate::models::Error;

/// Partitions `numbers` into `bucket_count` contiguous, equal-width intervals
/// spanning `[min, max]` and returns the values grouped per interval.
///
/// ### Boundary handling:
/// - A value's bucket index is `floor((value - min) / interval_size)`,
///   clamped to `bucket_count - 1`. Without the clamp the maximum value would
///   compute an index of `bucket_count` and fall out of range.
/// - When every value is identical the interval width is zero and all values
///   are placed in bucket 0; the remaining buckets come back empty.
///
/// ### Errors:
/// - `Error::InvalidInput` when `numbers` is empty or `bucket_count` is zero.
pub fn equal_interval_buckets(
    numbers: &[f64],
    bucket_count: usize,
) -> Result<Vec<Vec<f64>>, Error> {
    if numbers.is_empty() {
        return Err(Error::InvalidInput(
            "cannot bucket an empty sequence".to_string(),
        ));
    }
    if bucket_count == 0 {
        return Err(Error::InvalidInput(
            "bucket count must be positive".to_string(),
        ));
    }

    let min_val = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let interval_size = (max_val - min_val) / bucket_count as f64;

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); bucket_count];

    for &number in numbers {
        let index = if interval_size == 0.0 {
            // Degenerate range: every value equals both min and max
            0
        } else {
            (((number - min_val) / interval_size) as usize).min(bucket_count - 1)
        };
        buckets[index].push(number);
    }

    Ok(buckets)
}
