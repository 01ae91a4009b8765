use super::*;

#[test]
fn test_record_tallies_wins_and_points() {
    let mut line = StatLine::default();
    line.record(10, 4);
    line.record(7, 10);
    line.record(10, 9);

    assert_eq!(line.wins, 2);
    assert_eq!(line.losses, 1);
    assert_eq!(line.games(), 3);
    assert_eq!(line.points_for, 27);
    assert_eq!(line.points_against, 23);
    assert_eq!(line.points_diff(), 4);
    assert_eq!(line.win_pct(), Ratio::new(2, 3));
    assert_eq!(line.points_pct(), Ratio::new(27, 50));
    assert_eq!(line.win_record(), "2-1");
    assert_eq!(line.points_record(), "27-23");
}

#[test]
fn test_empty_line_is_undefined() {
    let line = StatLine::default();
    assert!(line.win_pct().is_none());
    assert!(line.points_pct().is_none());
    assert_eq!(line.wl_factor(), WL_FACTOR_NO_GAMES);
}

#[test]
fn test_wl_factor_ranks_even_split_above_no_games() {
    let mut split = StatLine::default();
    split.record(10, 5);
    split.record(5, 10);
    assert_eq!(split.wl_factor(), 0);
    assert!(split.wl_factor() > StatLine::default().wl_factor());

    let mut three_oh = StatLine::default();
    let mut two_oh = StatLine::default();
    for _ in 0..3 {
        three_oh.record(10, 2);
    }
    for _ in 0..2 {
        two_oh.record(10, 2);
    }
    assert_eq!(three_oh.win_pct(), two_oh.win_pct());
    assert!(three_oh.wl_factor() > two_oh.wl_factor());
}

#[test]
fn test_absorb_pairwise() {
    let mut pair = PairwiseRecord::default();
    pair.record(10, 6);
    pair.record(3, 10);
    pair.record(10, 8);
    assert_eq!(pair.losses(), 1);
    assert!(pair.is_winning());

    let mut line = StatLine::default();
    line.absorb(&pair);
    assert_eq!(line.win_record(), "2-1");
    assert_eq!(line.points_record(), "23-24");
}

#[test]
fn test_split_pairwise_record_is_not_winning() {
    let mut pair = PairwiseRecord::default();
    pair.record(10, 6);
    pair.record(6, 10);
    assert!(!pair.is_winning());
}
