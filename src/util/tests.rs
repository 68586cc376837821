use super::*;

#[test]
fn test_is_power_of_2() {
    assert!(!is_power_of_2(0));
    for n in 1..30 {
        assert!(is_power_of_2(2i64.pow(n)));
        assert!(is_power_of_2(-(2i64.pow(n))));
        assert!(!is_power_of_2(3i64.pow(n)));
    }
    for n in 1..27 {
        assert!(!is_power_of_2(-(5i64.pow(n))));
    }
    assert!(is_power_of_2(1));
    assert!(is_power_of_2(i64::MIN));
}

#[test]
fn test_iter_starts_with() {
    let empty: [&str; 0] = [];

    assert!(iter_starts_with(["a", "b", "c", "d"], ["a", "b", "c"]));
    assert!(!iter_starts_with(["a", "b", "c"], ["a", "b", "c", "d"]));

    assert!(iter_starts_with(["a", "b", "c"], ["a", "b", "c"]));

    assert!(iter_starts_with(["a", "b", "c"], empty));
    assert!(!iter_starts_with(empty, ["a", "b", "c"]));

    assert!(iter_starts_with(empty, empty));
}

#[test]
fn test_iter_starts_with_mismatch() {
    assert!(!iter_starts_with(vec![1, 2, 3], vec![1, 3]));
    assert!(iter_starts_with(1..10, 1..4));
}
