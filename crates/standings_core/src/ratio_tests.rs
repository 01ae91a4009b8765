use super::*;

#[test]
fn test_zero_denominator_is_undefined() {
    assert!(Ratio::new(0, 0).is_none());
    assert!(Ratio::new(3, 0).is_none());
    assert!(Ratio::new(0, 3).is_some());
}

#[test]
fn test_equal_fractions_compare_equal() {
    assert_eq!(Ratio::new(2, 3), Ratio::new(10, 15));
    assert_eq!(Ratio::new(1, 3), Ratio::new(50, 150));
    assert_eq!(Ratio::new(0, 1), Ratio::new(0, 152));
}

#[test]
fn test_ordering_is_exact() {
    let a = Ratio::new(1, 3).unwrap();
    let b = Ratio::new(333_333, 1_000_000).unwrap();
    assert!(a > b);
    assert!(Ratio::new(3, 4).unwrap() > Ratio::new(2, 3).unwrap());
}

#[test]
fn test_smallest_points_gap_is_distinguished() {
    // Two 152-point denominators one point apart
    let a = Ratio::new(77, 152).unwrap();
    let b = Ratio::new(76, 152).unwrap();
    assert_ne!(a, b);
    assert_ne!(a.percent_display(), b.percent_display());

    // Neighbouring ratios under the largest denominators still differ once formatted
    let c = Ratio::new(100, 152).unwrap();
    let d = Ratio::new(99, 151).unwrap();
    assert!(c > d);
    assert_ne!(c.percent_display(), d.percent_display());
}

#[test]
fn test_percent_display_rounds_to_three_places() {
    assert_eq!(Ratio::new(2, 3).unwrap().percent_display(), "66.667");
    assert_eq!(Ratio::new(1, 3).unwrap().percent_display(), "33.333");
    assert_eq!(Ratio::new(1, 1).unwrap().percent_display(), "100.000");
    assert_eq!(Ratio::new(0, 7).unwrap().percent_display(), "0.000");
    assert_eq!(Ratio::new(1, 8).unwrap().to_string(), "12.500%");
}

#[test]
fn test_fmt_pct_undefined() {
    assert_eq!(fmt_pct(None), "-");
    assert_eq!(fmt_pct(Ratio::new(1, 2)), "50.000");
}
