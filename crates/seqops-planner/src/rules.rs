//! Simple rewrite rules over a linear step list.

use crate::dsl::yaml::{clamp_count, Step};

/// Apply lightweight rewrites that never change the output sequence:
/// - `take(a), take(b)` → `take(min(a, b))`
/// - `drop(a), drop(b)` → `drop(a + b)`
/// - `distinct, distinct` → `distinct`
/// - `sort(o1), sort(o2)` → `sort(o2)` (the later sort decides the order)
/// - `flat` is the identity and is removed
pub fn optimize(steps: Vec<Step>) -> Vec<Step> {
    let mut out: Vec<Step> = Vec::with_capacity(steps.len());

    for step in steps {
        if step == Step::Flat {
            continue;
        }
        let merged = match (out.last_mut(), &step) {
            (Some(Step::Take { count: prev }), Step::Take { count }) => {
                *prev = clamp_count(*prev).min(clamp_count(*count)) as i64;
                true
            }
            (Some(Step::Drop { count: prev }), Step::Drop { count }) => {
                let total = clamp_count(*prev).saturating_add(clamp_count(*count));
                *prev = i64::try_from(total).unwrap_or(i64::MAX);
                true
            }
            (Some(Step::Distinct), Step::Distinct) => true,
            (Some(Step::Sort { order: prev }), Step::Sort { order }) => {
                *prev = *order;
                true
            }
            _ => false,
        };
        if !merged {
            out.push(step);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::yaml::SortOrder;

    #[test]
    fn fuses_adjacent_prefix_steps() {
        let steps = vec![
            Step::Take { count: 5 },
            Step::Take { count: 3 },
            Step::Drop { count: 1 },
            Step::Drop { count: -4 },
            Step::Drop { count: 2 },
        ];
        assert_eq!(
            optimize(steps),
            vec![Step::Take { count: 3 }, Step::Drop { count: 3 }]
        );
    }

    #[test]
    fn collapses_idempotent_steps() {
        let steps = vec![
            Step::Distinct,
            Step::Flat,
            Step::Distinct,
            Step::Sort {
                order: SortOrder::Asc,
            },
            Step::Sort {
                order: SortOrder::Desc,
            },
        ];
        assert_eq!(
            optimize(steps),
            vec![
                Step::Distinct,
                Step::Sort {
                    order: SortOrder::Desc
                }
            ]
        );
    }

    #[test]
    fn non_adjacent_steps_are_kept() {
        let steps = vec![
            Step::Take { count: 5 },
            Step::Distinct,
            Step::Take { count: 3 },
        ];
        assert_eq!(optimize(steps.clone()), steps);
    }
}
