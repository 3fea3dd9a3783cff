use ndarray::{Dimension, IxDyn};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tally::{
    calculate_subtotals, draw_laplace_with_rng, get_counts, grand_total, make_raw_data,
    random_row_with_rng, Error,
};

/// Field sizes plus a dataset whose rows are all in range.
fn sizes_and_rows() -> impl Strategy<Value = (Vec<usize>, Vec<Vec<usize>>)> {
    prop::collection::vec(1usize..5, 1..5).prop_flat_map(|sizes| {
        let row: Vec<_> = sizes.iter().map(|&n| 0..n).collect();
        (Just(sizes), prop::collection::vec(row, 0..60))
    })
}

proptest! {
    #[test]
    fn prop_random_row_in_range(
        sizes in prop::collection::vec(1usize..50, 1..8),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let row = random_row_with_rng(&sizes, &mut rng).unwrap();

        prop_assert_eq!(row.len(), sizes.len());
        for (&v, &n) in row.iter().zip(&sizes) {
            prop_assert!(v < n);
        }
    }

    #[test]
    fn prop_dataset_size_invariant(
        sizes in prop::collection::vec(1usize..10, 1..5),
        num_rows in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let data = make_raw_data(&sizes, num_rows, |s| random_row_with_rng(s, &mut rng)).unwrap();
        prop_assert_eq!(data.len(), num_rows);
        prop_assert!(data.iter().all(|r| r.len() == sizes.len()));
    }
}

proptest! {
    #[test]
    fn prop_counts_shape_and_total((sizes, rows) in sizes_and_rows()) {
        let counts = get_counts(&rows, &sizes).unwrap();

        prop_assert_eq!(counts.shape(), sizes.as_slice());
        prop_assert_eq!(grand_total(&counts), rows.len() as u64);
        for row in &rows {
            prop_assert!(counts[IxDyn(row)] >= 1);
        }
    }

    #[test]
    fn prop_subtotals_are_consistent_marginals((sizes, rows) in sizes_and_rows()) {
        let counts = get_counts(&rows, &sizes).unwrap();
        let subtotals = calculate_subtotals(&counts).unwrap();

        prop_assert_eq!(subtotals.len(), sizes.len());
        for (k, s) in subtotals.iter().enumerate() {
            let mut expected_shape = sizes.clone();
            expected_shape.remove(k);
            prop_assert_eq!(s.shape(), expected_shape.as_slice());
            prop_assert_eq!(grand_total(s), rows.len() as u64);

            // Marginal k counts the rows with field k projected out.
            for (idx, &v) in s.indexed_iter() {
                let n = rows
                    .iter()
                    .filter(|r| {
                        let mut p = (*r).clone();
                        p.remove(k);
                        p.as_slice() == idx.slice()
                    })
                    .count() as u64;
                prop_assert_eq!(v, n);
            }
        }
    }

    #[test]
    fn prop_out_of_range_rejected(
        (sizes, rows) in sizes_and_rows(),
        field in any::<prop::sample::Index>(),
        excess in 0usize..3,
    ) {
        let mut rows = rows;
        let mut bad = vec![0; sizes.len()];
        let f = field.index(sizes.len());
        bad[f] = sizes[f] + excess;
        rows.push(bad);

        let err = get_counts(&rows, &sizes).unwrap_err();
        prop_assert!(matches!(err, Error::InvalidInput(_)));
    }
}

proptest! {
    #[test]
    fn prop_noise_shape_matches(
        shape in prop::collection::vec(1usize..6, 1..5),
        scale in 1e-6f64..1e6,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let noise = draw_laplace_with_rng(scale, &shape, &mut rng).unwrap();

        prop_assert_eq!(noise.shape(), shape.as_slice());
        prop_assert!(noise.iter().all(|x| x.is_finite()));
    }
}

#[test]
fn one_field_pipeline() {
    let rows = vec![vec![0], vec![0], vec![1]];
    let counts = get_counts(&rows, &[3]).unwrap();
    assert_eq!(counts.iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);

    let subtotals = calculate_subtotals(&counts).unwrap();
    assert_eq!(subtotals.len(), 1);
    assert_eq!(subtotals[0].ndim(), 0);
    assert_eq!(subtotals[0].iter().copied().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn two_field_pipeline() {
    let rows = vec![vec![0, 0], vec![0, 0], vec![1, 1]];
    let counts = get_counts(&rows, &[2, 2]).unwrap();
    assert_eq!(counts.iter().copied().collect::<Vec<_>>(), vec![2, 0, 0, 1]);

    let subtotals = calculate_subtotals(&counts).unwrap();
    for s in &subtotals {
        assert_eq!(s.shape(), &[2]);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    }
}

#[test]
fn empty_field_sizes_rejected_everywhere() {
    assert!(matches!(tally::random_row(&[]), Err(Error::InvalidInput(_))));
    assert!(matches!(
        make_raw_data(&[], 5, tally::random_row),
        Err(Error::InvalidInput(_))
    ));
    assert_eq!(
        make_raw_data(&[2, 2], 0, tally::random_row),
        Err(Error::InvalidCount(0))
    );
}
