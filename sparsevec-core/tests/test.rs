use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use rstest::*;

use sparsevec_core::{ISparseVec, ParseError, SparseVec, SparseVector};

#[fixture]
fn vectors() -> Vec<ISparseVec> {
    vec![
        ISparseVec::empty(),
        ISparseVec::from_dense(&[1, 2, 3, 4, 5]),
        ISparseVec::from_dense(&[0, 0, 7]),
        "{3:-2,10:4,100:1}".parse().unwrap(),
        ISparseVec::from_sparse_map(BTreeMap::from([(0, 0), (2, -1)])),
    ]
}

#[rstest]
#[case("{1:2,2:-3}")]
#[case("{0:1,3:-2,7:4}")]
#[case("{}")]
fn test_canonical_text_round_trip(#[case] text: &str) {
    let sv = ISparseVec::from_text(text).unwrap();
    assert_eq!(sv.to_text(), text);
}

#[rstest]
#[case("7:1, 3:5 , 4:6, 6:0", "{3:5,4:6,7:1}")]
#[case("{ 5 : 6 ,7:3 }", "{5:6,7:3}")]
#[case("{2:1,2:4}", "{2:4}")]
#[case(" {\t0:0 }\n", "{}")]
fn test_non_canonical_text_is_canonicalized(#[case] text: &str, #[case] expected: &str) {
    let sv = ISparseVec::from_text(text).unwrap();
    assert_eq!(sv.to_text(), expected);
}

#[rstest]
fn test_float_text() {
    let sv = SparseVec::from_text("{0:1.5,3:-2,7:4}").unwrap();
    assert_eq!(sv.get(0), 1.5);
    assert_eq!(sv.get(3), -2.0);
    assert_eq!(sv.to_text(), "{0:1.5,3:-2,7:4}");
}

#[rstest]
#[case("")]
#[case("{}")]
#[case("   ")]
fn test_empty_text(#[case] text: &str) {
    let sv = SparseVec::from_text(text).unwrap();
    assert!(sv.is_empty());
    assert_eq!(sv, SparseVec::empty());
}

#[rstest]
#[case("{1:}", ParseError::InvalidValue("1:".to_string()))]
#[case("{abc:2}", ParseError::InvalidIndex("abc:2".to_string()))]
#[case("{1:xyz}", ParseError::InvalidValue("1:xyz".to_string()))]
#[case("{12}", ParseError::MissingSeparator("12".to_string()))]
#[case("{1:2,}", ParseError::MissingSeparator("".to_string()))]
#[case("{1:2:3}", ParseError::InvalidValue("1:2:3".to_string()))]
fn test_parse_errors(#[case] text: &str, #[case] expected: ParseError) {
    assert_eq!(SparseVec::from_text(text).unwrap_err(), expected);
}

#[rstest]
fn test_integer_value_rejects_float_text() {
    assert!(ISparseVec::from_text("{0:1.5}").is_err());
}

#[rstest]
fn test_read_default(vectors: Vec<ISparseVec>) {
    for sv in vectors {
        assert_eq!(sv.get(1_000), 0);
        assert_eq!(sv.get(-1), 0);
    }
}

#[rstest]
fn test_normalization_idempotent(vectors: Vec<ISparseVec>) {
    for sv in vectors {
        let once = sv.normalized();
        let twice = ISparseVec::from_sparse_map(once.clone()).normalized();
        assert_eq!(once, twice);
    }
}

#[rstest]
#[case(vec![1, 0, 0])]
#[case(vec![0, 1, 2, 4])]
#[case(vec![5])]
fn test_dense_round_trip(#[case] dense: Vec<i32>) {
    assert_eq!(ISparseVec::from_dense(&dense).to_dense(), dense);
}

#[rstest]
fn test_dense_after_arithmetic_loses_trailing_zeros() {
    let sv = ISparseVec::from_dense(&[1, 0, 0]).add(&ISparseVec::empty());
    assert_eq!(sv.to_dense(), vec![1]);
}

#[rstest]
fn test_to_sparse_map_excludes_zeros() {
    let sv = ISparseVec::from_dense(&[1, 2, 3, 0, 5]);
    assert_eq!(
        sv.to_sparse_map(),
        BTreeMap::from([(0, 1), (1, 2), (2, 3), (4, 5)])
    );
    assert_eq!(
        ISparseVec::from_sparse_map(BTreeMap::from([(0, 1), (1, 2), (2, 3), (5, 5)])).to_dense(),
        vec![1, 2, 3, 0, 0, 5]
    );
}

#[rstest]
fn test_additive_identity(vectors: Vec<ISparseVec>) {
    for sv in vectors {
        assert!(sv.add(&ISparseVec::empty()).equals(&sv));
    }
}

#[rstest]
fn test_inverse(vectors: Vec<ISparseVec>) {
    for sv in vectors {
        assert!(sv.subtract(&sv).is_empty());
        assert!(sv.add(&sv.subtract(&sv)).equals(&sv));
    }
}

#[rstest]
fn test_comparison_reflexivity(vectors: Vec<ISparseVec>) {
    for sv in vectors {
        assert!(sv.equals(&sv));
        assert!(sv.less_or_equal(&sv));
        assert!(sv.greater_or_equal(&sv));
    }
}

#[rstest]
fn test_end_to_end() {
    let a = SparseVec::from_text("{0:1,2:3}").unwrap();
    let b = SparseVec::from_text("{2:3,5:1}").unwrap();

    assert_eq!(a.add(&b).to_text(), "{0:1,2:6,5:1}");
    assert_eq!(a.subtract(&b).to_text(), "{0:1,5:-1}");
    assert!(!a.less_or_equal(&b));
}

#[rstest]
fn test_pareto_ordering() {
    let a = ISparseVec::from_dense(&[1, 2, 3, 0]);
    let b = ISparseVec::from_dense(&[1, 2, 4, 5]);

    assert!(a.less_or_equal(&b));
    assert!(!a.less_than(&b));
    assert!(!a.equals(&b));
    assert!(!a.greater_or_equal(&b));
    assert!(!a.greater_than(&b));

    assert!(b.greater_or_equal(&a));
    assert!(!b.greater_than(&a));
    assert!(!b.less_or_equal(&a));
    assert!(!b.less_than(&a));
}

#[rstest]
#[case(vec![1, 2, 3], vec![1, 0, 3])]
#[case(vec![1, 2, 3, 4], vec![1, 2, 3])]
fn test_inequality_is_symmetric(#[case] left: Vec<i32>, #[case] right: Vec<i32>) {
    let a = ISparseVec::from(left);
    let b = ISparseVec::from(right);
    assert!(a.not_equals(&b));
    assert!(b.not_equals(&a));
    assert!(a != b);
}

#[rstest]
fn test_set_then_rebuild_from_map() {
    let writes = [(3, 1.5f32), (0, -2.0), (3, 0.25), (9, 0.0)];

    let mut by_set = SparseVec::empty();
    for (i, v) in writes {
        by_set.set(i, v);
    }
    let by_map: SparseVector<f32> = writes.into_iter().collect();

    assert_eq!(by_set, by_map);
    assert_eq!(by_set.to_text(), "{0:-2,3:0.25}");
}

#[rstest]
fn test_random_dense_access() {
    let values: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.37).sin()).collect();
    let sv = SparseVector::from_dense(&values);
    for (i, v) in values.iter().enumerate() {
        assert!((sv.get(i as i64) - v).abs() < 1e-12);
    }
}
