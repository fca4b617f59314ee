// ---------------------------------------------------------------------------
// Cleaning: drop missing, then non-finite values
// ---------------------------------------------------------------------------

/// Remove empty cells, then NaN / ±infinity, keeping the original order.
///
/// Empty input gives empty output.
pub fn clean(values: &[Option<f64>]) -> Vec<f64> {
    let present = values.iter().flatten().copied();
    present.filter(|v| v.is_finite()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_in_empty_out() {
        assert!(clean(&[]).is_empty());
    }

    #[test]
    fn drops_nulls_and_non_finite() {
        let raw = [
            Some(81.0),
            None,
            Some(f64::NAN),
            Some(82.0),
            Some(f64::INFINITY),
            Some(f64::NEG_INFINITY),
            Some(81.5),
        ];
        assert_eq!(clean(&raw), vec![81.0, 82.0, 81.5]);
    }

    #[test]
    fn output_is_the_finite_sub_multiset() {
        let raw = [
            Some(1.0),
            Some(1.0),
            None,
            Some(f64::NAN),
            Some(-3.5),
            Some(1.0),
            Some(f64::INFINITY),
        ];
        let cleaned = clean(&raw);

        assert!(cleaned.iter().all(|v| v.is_finite()));

        let mut expected: Vec<f64> = raw
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        let mut got = cleaned.clone();
        expected.sort_by(f64::total_cmp);
        got.sort_by(f64::total_cmp);
        assert_eq!(got, expected);
    }

    #[test]
    fn all_invalid_gives_empty() {
        assert!(clean(&[None, Some(f64::NAN), Some(f64::INFINITY)]).is_empty());
    }
}
