use anyhow::{anyhow, Result};

/// Index in the sorted sequence that holds the given fractile.
pub fn fractile_index(len: usize, fractile: f64) -> usize {
    if fractile >= 1.0 {
        len.saturating_sub(1)
    } else if fractile <= 0.0 {
        0
    } else {
        ((fractile * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Value at `fractile` (0.0 is the minimum, 1.0 the maximum) of an unsorted sequence.
/// The input is copied, so its order is kept.
pub fn fractile(values: &[f64], fractile: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(anyhow!("Cannot compute fractile of empty input"));
    }
    if fractile.is_nan() {
        return Err(anyhow!("Fractile must be a number"));
    }

    let mut arr = values.to_vec();
    let k = fractile_index(arr.len(), fractile);
    Ok(quick_select(&mut arr, k))
}

/// Returns the value that would be at index `k` if `arr` was sorted. `arr` is
/// partially reordered.
///
/// Median-of-three quickselect from "Numerical recipes in C", second edition,
/// section 8.5.
///
/// # Panics
///
/// Panics if `k >= arr.len()`, which includes every `k` for an empty `arr`.
pub fn quick_select(arr: &mut [f64], k: usize) -> f64 {
    assert!(k < arr.len(), "Index {} out of bound {}", k, arr.len());

    let mut low = 0;
    let mut high = arr.len() - 1;
    loop {
        // One element only
        if high <= low {
            return arr[k];
        }

        // Two elements only
        if high == low + 1 {
            if arr[low] > arr[high] {
                arr.swap(low, high);
            }
            return arr[k];
        }

        // Median of low, middle and high goes to position low
        let middle = (low + high) / 2;
        if arr[middle] > arr[high] {
            arr.swap(middle, high);
        }
        if arr[low] > arr[high] {
            arr.swap(low, high);
        }
        if arr[middle] > arr[low] {
            arr.swap(middle, low);
        }
        arr.swap(middle, low + 1);

        // Nibble from each end towards the middle, swapping items when stuck
        let mut ll = low + 1;
        let mut hh = high;
        loop {
            ll += 1;
            while arr[low] > arr[ll] {
                ll += 1;
            }
            hh -= 1;
            while arr[hh] > arr[low] {
                hh -= 1;
            }
            if hh < ll {
                break;
            }
            arr.swap(ll, hh);
        }

        // Pivot back into its final position
        arr.swap(low, hh);

        if hh <= k {
            low = ll;
        }
        if hh >= k {
            high = hh - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::test_utils::generate_random_vector_f64;

    fn sorted(values: &[f64]) -> Vec<f64> {
        let mut v = values.to_vec();
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn test_fractile_index() {
        assert_eq!(fractile_index(10, -0.5), 0);
        assert_eq!(fractile_index(10, 0.0), 0);
        assert_eq!(fractile_index(10, 0.5), 5);
        assert_eq!(fractile_index(10, 0.99), 9);
        assert_eq!(fractile_index(10, 1.0), 9);
        assert_eq!(fractile_index(10, 3.0), 9);
    }

    #[test]
    fn test_fractile_small() {
        let values = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(fractile(&values, 0.0).unwrap(), 1.0);
        assert_eq!(fractile(&values, 0.5).unwrap(), 3.0);
        assert_eq!(fractile(&values, 1.0).unwrap(), 5.0);
        // Input is left untouched
        assert_eq!(values, vec![5.0, 1.0, 4.0, 2.0, 3.0]);

        assert_eq!(fractile(&[7.0], 0.3).unwrap(), 7.0);
        assert_eq!(fractile(&[9.0, 8.0], 0.5).unwrap(), 9.0);
        assert_eq!(fractile(&[9.0, 8.0], 0.0).unwrap(), 8.0);
    }

    #[test]
    fn test_fractile_with_duplicates() {
        let values = vec![2.0, 2.0, 1.0, 2.0, 1.0, 3.0, 2.0];
        let expected = sorted(&values);
        for k in 0..values.len() {
            let mut arr = values.clone();
            assert_eq!(quick_select(&mut arr, k), expected[k]);
        }
    }

    #[test]
    fn test_fractile_random() {
        for size in [3, 10, 101, 1000] {
            let values = generate_random_vector_f64(size);
            let expected = sorted(&values);
            for f in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
                let k = fractile_index(size, f);
                assert_abs_diff_eq!(fractile(&values, f).unwrap(), expected[k]);
            }
        }
    }

    #[test]
    fn test_fractile_invalid_input() {
        assert!(fractile(&[], 0.5).is_err());
        assert!(fractile(&[1.0, 2.0], f64::NAN).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bound")]
    fn test_quick_select_index_out_of_bound() {
        let mut values = vec![3.0, 1.0, 2.0];
        quick_select(&mut values, 3);
    }
}
