use argminmax::ArgMinMax;

/// Largest value in the slice. None for an empty slice.
#[inline]
pub(crate) fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

/// Smallest value in the slice. None for an empty slice.
#[inline]
pub(crate) fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

/// Median by full sort.
/// Even lengths take the upper of the two middle elements (index len / 2), no averaging.
pub(crate) fn median_upper(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(sorted[sorted.len() / 2])
}

#[inline]
pub(crate) fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_upper(&[3.0, 1.0, 2.0]), Some(2.0));
        // Upper middle, not the average of 2.0 and 3.0
        assert_eq!(median_upper(&[4.0, 1.0, 3.0, 2.0]), Some(3.0));
        assert_eq!(median_upper(&[]), None);
    }

    #[test]
    fn test_min_max() {
        let data = [1.0, 0.98, 1.02, 0.999];
        assert_eq!(get_min(&data), Some(0.98));
        assert_eq!(get_max(&data), Some(1.02));
        assert_eq!(get_max(&[]), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0]), Some(1.5));
        assert_eq!(mean(&[]), None);
    }
}
