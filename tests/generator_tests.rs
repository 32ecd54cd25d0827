use seqops_operators::{primes, primes_from, range, take, SequenceExt};

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

#[test]
fn test_range_basic() {
    let out: Vec<i64> = range(0, 5, 1).collect();
    assert_eq!(out, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_range_step_overshoots_end() {
    let out: Vec<i64> = range(1, 10, 4).collect();
    assert_eq!(out, vec![1, 5, 9]);
}

#[test]
fn test_range_end_is_exclusive() {
    let out: Vec<i64> = range(0, 9, 3).collect();
    assert_eq!(out, vec![0, 3, 6]);
}

#[test]
fn test_range_empty_when_start_not_below_end() {
    assert_eq!(range(5, 5, 1).next(), None);
    assert_eq!(range(6, 5, 1).next(), None);
}

#[test]
fn test_range_last_step_past_type_max() {
    let out: Vec<u8> = range(250u8, 255, 10).collect();
    assert_eq!(out, vec![250]);

    let out: Vec<i32> = range(i32::MAX - 5, i32::MAX, 4).collect();
    assert_eq!(out, vec![i32::MAX - 5, i32::MAX - 1]);

    let out: Vec<i64> = range(i64::MAX - 1, i64::MAX, 2).collect();
    assert_eq!(out, vec![i64::MAX - 1]);
}

#[test]
fn test_range_overflow_with_take_is_finite() {
    let out: Vec<u64> = range(u64::MAX - 2, u64::MAX, u64::MAX)
        .pipe(take(10))
        .collect();
    assert_eq!(out, vec![u64::MAX - 2]);
}

#[test]
fn test_range_restarts_per_call() {
    let a: Vec<i32> = range(0, 3, 1).collect();
    let b: Vec<i32> = range(0, 3, 1).collect();
    assert_eq!(a, b);
}

#[test]
fn test_first_five_primes() {
    let out: Vec<u64> = primes().pipe(take(5)).collect();
    assert_eq!(out, vec![2, 3, 5, 7, 11]);
}

#[test]
fn test_primes_match_reference_definition() {
    let out: Vec<u64> = primes().pipe(take(200)).collect();
    let expected: Vec<u64> = (0..).filter(|n| is_prime(*n)).take(200).collect();
    assert_eq!(out, expected);
}

#[test]
fn test_primes_are_independent_per_call() {
    let mut a = primes();
    let mut b = primes();
    assert_eq!(a.next(), Some(2));
    assert_eq!(a.next(), Some(3));
    assert_eq!(b.next(), Some(2));
}

#[test]
fn test_primes_from_zero_literal_policy() {
    let out: Vec<u64> = primes_from(0).pipe(take(5)).collect();
    assert_eq!(out, vec![0, 1]);
}

#[test]
fn test_primes_from_two_equals_primes() {
    let a: Vec<u64> = primes_from(2).pipe(take(20)).collect();
    let b: Vec<u64> = primes().pipe(take(20)).collect();
    assert_eq!(a, b);
}
