use std::cell::Cell;

use seqops_core::order::{ascending, by_sign};
use seqops_operators::{
    count, every, find, max, min, none, primes, range, reduce, some, sum, Aggregation,
    SequenceExt,
};

fn sources(data: &[i64]) -> Vec<(&'static str, Box<dyn Iterator<Item = i64>>)> {
    let array: Box<dyn Iterator<Item = i64>> = Box::new(data.to_vec().into_iter());
    let mut pending = data.to_vec().into_iter();
    let generator: Box<dyn Iterator<Item = i64>> =
        Box::new(std::iter::from_fn(move || pending.next()));
    vec![("array", array), ("generator", generator)]
}

fn signed() -> impl FnMut(&i64, &i64) -> std::cmp::Ordering {
    by_sign(|a: &i64, b: &i64| a - b)
}

#[test]
fn test_min_returns_smallest() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert_eq!(source.finish(min::<i64, _>(signed())), Some(1), "{kind}");
    }
}

#[test]
fn test_min_single_value() {
    for (kind, source) in sources(&[3]) {
        assert_eq!(source.finish(min::<i64, _>(signed())), Some(3), "{kind}");
    }
}

#[test]
fn test_min_empty_is_none() {
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(min::<i64, _>(signed())), None, "{kind}");
    }
}

#[test]
fn test_max_returns_largest() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert_eq!(source.finish(max::<i64, _>(signed())), Some(4), "{kind}");
    }
}

#[test]
fn test_max_single_value() {
    for (kind, source) in sources(&[3]) {
        assert_eq!(source.finish(max::<i64, _>(signed())), Some(3), "{kind}");
    }
}

#[test]
fn test_max_empty_is_none() {
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(max::<i64, _>(signed())), None, "{kind}");
    }
}

#[test]
fn test_max_by_key_keeps_first_of_ties() {
    let words = vec!["bb", "a", "cc", "d"];
    let longest = max(|a: &&str, b: &&str| a.len().cmp(&b.len())).aggregate(words.clone());
    assert_eq!(longest, Some("bb"));
    let shortest = min(|a: &&str, b: &&str| a.len().cmp(&b.len())).aggregate(words);
    assert_eq!(shortest, Some("a"));
}

#[test]
fn test_count_values() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert_eq!(source.finish(count()), 4, "{kind}");
    }
}

#[test]
fn test_count_empty_is_zero() {
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(count()), 0, "{kind}");
    }
}

#[test]
fn test_find_first_match() {
    for (kind, source) in sources(&[1, 4, 6, 8]) {
        assert_eq!(source.finish(find(|x: &i64| x % 2 == 0)), Some(4), "{kind}");
    }
}

#[test]
fn test_find_no_match_or_empty() {
    for (kind, source) in sources(&[1, 3]) {
        assert_eq!(source.finish(find(|x: &i64| *x > 10)), None, "{kind}");
    }
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(find(|_: &i64| true)), None, "{kind}");
    }
}

#[test]
fn test_find_short_circuits_infinite_source() {
    let first_big = primes().finish(find(|p: &u64| *p > 100));
    assert_eq!(first_big, Some(101));
}

#[test]
fn test_reduce_left_fold() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert_eq!(
            source.finish(reduce(|a: i64, b: i64| a + b, 0)),
            10,
            "{kind}"
        );
    }
}

#[test]
fn test_reduce_is_left_associative() {
    let folded = reduce(|acc: String, x: i64| format!("({acc}{x})"), String::new())
        .aggregate(vec![1, 2, 3]);
    assert_eq!(folded, "(((1)2)3)");
}

#[test]
fn test_reduce_empty_returns_initial() {
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(reduce(|a: i64, b: i64| a * b, 7)), 7, "{kind}");
    }
}

#[test]
fn test_sum() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert_eq!(source.finish(sum()), 10, "{kind}");
    }
    for (kind, source) in sources(&[]) {
        assert_eq!(source.finish(sum()), 0, "{kind}");
    }
    let floats: f64 = range(0.5, 2.0, 0.5).finish(sum());
    assert_eq!(floats, 3.0);
}

#[test]
fn test_some_any_match() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert!(source.finish(some(|x: &i64| *x == 2)), "{kind}");
    }
}

#[test]
fn test_some_no_match() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert!(!source.finish(some(|x: &i64| *x == 5)), "{kind}");
    }
}

#[test]
fn test_some_empty_is_false() {
    for (kind, source) in sources(&[]) {
        assert!(!source.finish(some(|x: &i64| *x == 5)), "{kind}");
    }
}

#[test]
fn test_none_any_match_is_false() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert!(!source.finish(none(|x: &i64| *x == 2)), "{kind}");
    }
}

#[test]
fn test_none_no_match_is_true() {
    for (kind, source) in sources(&[1, 2, 3, 4]) {
        assert!(source.finish(none(|x: &i64| *x == 5)), "{kind}");
    }
}

#[test]
fn test_none_empty_is_true() {
    for (kind, source) in sources(&[]) {
        assert!(source.finish(none(|x: &i64| *x == 5)), "{kind}");
    }
}

#[test]
fn test_every() {
    for (kind, source) in sources(&[2, 4, 6]) {
        assert!(source.finish(every(|x: &i64| x % 2 == 0)), "{kind}");
    }
    for (kind, source) in sources(&[2, 3, 6]) {
        assert!(!source.finish(every(|x: &i64| x % 2 == 0)), "{kind}");
    }
    for (kind, source) in sources(&[]) {
        assert!(source.finish(every(|_: &i64| false)), "{kind}");
    }
}

#[test]
fn test_every_short_circuits_on_first_failure() {
    let calls = Cell::new(0);
    let all_small = every(|x: &i64| {
        calls.set(calls.get() + 1);
        *x < 3
    })
    .aggregate(range(0, i64::MAX, 1));
    assert!(!all_small);
    assert_eq!(calls.get(), 4);
}

#[test]
fn test_some_short_circuits_on_first_match() {
    let calls = Cell::new(0);
    let found = some(|x: &i64| {
        calls.set(calls.get() + 1);
        *x == 1
    })
    .aggregate(vec![0, 1, 2, 3]);
    assert!(found);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_aggregation_names_are_stable() {
    assert_eq!(Aggregation::<Vec<i64>>::name(&count()), "count");
    assert_eq!(Aggregation::<Vec<i64>>::name(&sum()), "sum");
    assert_eq!(
        Aggregation::<Vec<i64>>::name(&max::<i64, _>(ascending())),
        "max"
    );
    assert_eq!(
        Aggregation::<Vec<i64>>::name(&min::<i64, _>(ascending())),
        "min"
    );
}
