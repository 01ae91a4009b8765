use super::*;
use crate::test_support::{ids, stats};

fn cohort(members: &[&str]) -> Cohort {
    Cohort {
        position: 1,
        win_pct: Ratio::new(1, 2),
        members: ids(members),
    }
}

fn round_robin() -> TieBreakResolver {
    TieBreakResolver::new(
        vec![
            Criterion::HeadToHeadWinPct,
            Criterion::HeadToHeadPointsPct,
            Criterion::PointsPct,
        ],
        "tiebreak",
    )
}

#[test]
fn test_singleton_passes_through() {
    let stats = stats(&["a"], &[]);
    let resolution = round_robin().resolve(&cohort(&["a"]), &stats);
    assert_eq!(resolution.order, ids(&["a"]));
    assert_eq!(resolution.decided_by[&"a".into()], DecidedBy::WinPct);
    assert!(resolution.steps.is_empty());
    assert!(!resolution.residual_tie());
}

#[test]
fn test_head_to_head_win_decides() {
    // a and b both 1-1; b has the better points but a won the meeting
    let stats = stats(
        &["a", "b", "x", "y"],
        &[("a", "b", 10, 9), ("x", "a", 10, 0), ("b", "y", 10, 0)],
    );
    let resolution = round_robin().resolve(&cohort(&["b", "a"]), &stats);

    assert_eq!(resolution.order, ids(&["a", "b"]));
    assert_eq!(
        resolution.decided_by[&"a".into()],
        DecidedBy::Cascade(Criterion::HeadToHeadWinPct)
    );
    assert_eq!(resolution.steps.len(), 1);
    assert!(resolution.steps[0].resolved_any());
}

#[test]
fn test_cycle_falls_through_to_head_to_head_points() {
    // a > b > c > a, each 1-1 inside the cohort
    let stats = stats(
        &["a", "b", "c"],
        &[("a", "b", 10, 8), ("b", "c", 10, 2), ("c", "a", 10, 5)],
    );
    let resolution = round_robin().resolve(&cohort(&["a", "b", "c"]), &stats);

    // Points: a 15-18, b 18-12, c 12-15
    assert_eq!(resolution.order, ids(&["b", "a", "c"]));
    assert_eq!(resolution.steps[0].criterion, Criterion::HeadToHeadWinPct);
    assert!(!resolution.steps[0].resolved_any());
    assert_eq!(resolution.steps[1].criterion, Criterion::HeadToHeadPointsPct);
    assert_eq!(resolution.steps[1].splits.len(), 3);
    for id in ["a", "b", "c"] {
        assert_eq!(
            resolution.decided_by[&id.into()],
            DecidedBy::Cascade(Criterion::HeadToHeadPointsPct)
        );
    }
}

#[test]
fn test_recursion_only_into_tied_subgroups() {
    // a beats both; b and c never met and have the same h2h record
    let stats = stats(
        &["a", "b", "c", "x"],
        &[
            ("a", "b", 10, 5),
            ("a", "c", 10, 5),
            ("b", "x", 10, 1),
            ("c", "x", 10, 7),
            ("x", "a", 10, 0),
        ],
    );
    let resolution = round_robin().resolve(&cohort(&["c", "b", "a"]), &stats);

    assert_eq!(resolution.order, ids(&["a", "b", "c"]));
    // h2h win pct splits {a} {b, c}; h2h points leaves b, c tied; overall points separates
    let criteria: Vec<_> = resolution.steps.iter().map(|s| s.criterion).collect();
    assert_eq!(
        criteria,
        vec![
            Criterion::HeadToHeadWinPct,
            Criterion::HeadToHeadPointsPct,
            Criterion::PointsPct
        ]
    );
    assert_eq!(resolution.steps[1].values.len(), 2);
    assert_eq!(
        resolution.decided_by[&"b".into()],
        DecidedBy::Cascade(Criterion::PointsPct)
    );
}

#[test]
fn test_member_without_cohort_games_does_not_split_head_to_head() {
    // a, b, c all 1-1; a beat b, c met neither but has the best overall points
    let stats = stats(
        &["a", "b", "c", "x", "y"],
        &[
            ("a", "b", 11, 9),
            ("y", "a", 11, 0),
            ("b", "x", 11, 0),
            ("c", "x", 11, 0),
            ("y", "c", 11, 10),
        ],
    );
    let resolution = round_robin().resolve(&cohort(&["a", "b", "c"]), &stats);

    // Points: c 21/32, b 20/31, a 11/31
    assert_eq!(resolution.order, ids(&["c", "b", "a"]));
    assert_eq!(resolution.steps.len(), 3);
    assert!(!resolution.steps[0].resolved_any());
    assert!(!resolution.steps[1].resolved_any());
    assert_eq!(
        resolution.decided_by[&"c".into()],
        DecidedBy::Cascade(Criterion::PointsPct)
    );
}

#[test]
fn test_residual_tie_uses_coin_flip() {
    // Mirror-image records: nothing separates a and b
    let stats = stats(&["a", "b"], &[("a", "b", 10, 5), ("b", "a", 10, 5)]);
    let resolver = round_robin();
    let resolution = resolver.resolve(&cohort(&["a", "b"]), &stats);

    assert!(resolution.residual_tie());
    assert_eq!(resolution.residual_groups, vec![ids(&["a", "b"])]);
    assert_eq!(resolution.order, coin_flip("tiebreak", &ids(&["a", "b"])));
    assert_eq!(resolution.decided_by[&"a".into()], DecidedBy::CoinFlip);
    assert_eq!(resolution.steps.len(), 3);

    let again = resolver.resolve(&cohort(&["b", "a"]), &stats);
    assert_eq!(again.order, resolution.order);
}

#[test]
fn test_wl_factor_separates_equal_percentages() {
    let stats = stats(
        &["a", "b", "x", "y", "z"],
        &[
            ("a", "x", 10, 5),
            ("a", "y", 10, 5),
            ("a", "z", 10, 5),
            ("b", "x", 10, 0),
            ("b", "y", 10, 0),
        ],
    );
    let resolver = TieBreakResolver::new(
        vec![Criterion::WlFactor, Criterion::PointsPct],
        "tiebreak",
    );
    let resolution = resolver.resolve(&cohort(&["b", "a"]), &stats);
    assert_eq!(resolution.order, ids(&["a", "b"]));
    assert_eq!(
        resolution.decided_by[&"b".into()],
        DecidedBy::Cascade(Criterion::WlFactor)
    );
}

#[test]
fn test_empty_cascade_goes_straight_to_coin_flip() {
    let stats = stats(&["a", "b", "c"], &[]);
    let resolver = TieBreakResolver::new(vec![], "seed");
    let resolution = resolver.resolve(&cohort(&["a", "b", "c"]), &stats);
    assert_eq!(resolution.order.len(), 3);
    assert_eq!(resolution.residual_groups.len(), 1);
}

#[test]
fn test_coin_flip_is_reproducible() {
    let group = ids(&["f", "b", "d", "a", "e", "c"]);
    let first = coin_flip("tiebreak", &group);
    let mut reversed = group.clone();
    reversed.reverse();
    assert_eq!(coin_flip("tiebreak", &reversed), first);

    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(sorted, ids(&["a", "b", "c", "d", "e", "f"]));

    let differs = ('a'..='z')
        .map(|c| coin_flip(&c.to_string(), &group))
        .any(|order| order != first);
    assert!(differs);
}

#[test]
fn test_value_display() {
    assert_eq!(CriterionValue::Pct(Ratio::new(1, 3)).to_string(), "33.333");
    assert_eq!(CriterionValue::Pct(None).to_string(), "-");
    assert_eq!(CriterionValue::Count(-1).to_string(), "-1");
}
