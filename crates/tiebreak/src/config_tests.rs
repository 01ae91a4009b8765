use super::*;

#[test]
fn test_round_robin_defaults() {
    let config = RankingConfig::default();
    assert_eq!(config.cohort_scope, CohortScope::RoundRobin);
    assert_eq!(
        config.criteria(),
        vec![
            Criterion::HeadToHeadWinPct,
            Criterion::HeadToHeadPointsPct,
            Criterion::PointsPct
        ]
    );
    assert!(config.elevation_enabled());
    assert!(config.uses_divisions());
    assert_eq!(config.fallback_seed, DEFAULT_FALLBACK_SEED);
}

#[test]
fn test_seeding_skips_head_to_head() {
    let config = RankingConfig::for_scope(CohortScope::Seeding);
    assert_eq!(config.criteria(), vec![Criterion::PointsPct]);
    assert!(!config.elevation_enabled());
    assert!(!config.uses_divisions());
}

#[test]
fn test_wl_factor_goes_first() {
    let config = RankingConfig {
        wl_factor: true,
        ..Default::default()
    };
    assert_eq!(config.criteria()[0], Criterion::WlFactor);
    assert_eq!(config.criteria().len(), 4);
}

#[test]
fn test_wl_factor_not_duplicated() {
    let config = RankingConfig {
        wl_factor: true,
        criteria: Some(vec![Criterion::PointsDiff, Criterion::WlFactor]),
        ..Default::default()
    };
    assert_eq!(
        config.criteria(),
        vec![Criterion::PointsDiff, Criterion::WlFactor]
    );
}

#[test]
fn test_parse_toml() {
    let config = RankingConfig::from_toml_str(
        r#"
        wl_factor = true
        fallback_seed = "spring-2025"
        cohort_scope = "seeding"
        criteria = ["head_to_head_win_pct", "points_diff"]
        elevation = true
        elevation_scope = "stage"
        game_points = 10
        "#,
    )
    .unwrap();

    assert!(config.wl_factor);
    assert_eq!(config.fallback_seed, "spring-2025");
    assert_eq!(config.cohort_scope, CohortScope::Seeding);
    assert_eq!(
        config.criteria(),
        vec![
            Criterion::WlFactor,
            Criterion::HeadToHeadWinPct,
            Criterion::PointsDiff
        ]
    );
    assert!(config.elevation_enabled());
    assert_eq!(config.elevation_scope, ElevationScope::Stage);
    assert_eq!(config.game_points, Some(10));
    assert!(!config.require_complete);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(
        RankingConfig::from_toml_str("").unwrap(),
        RankingConfig::default()
    );
}

#[test]
fn test_unknown_criterion_rejected() {
    assert!(RankingConfig::from_toml_str(r#"criteria = ["coin_flip"]"#).is_err());
}

#[test]
fn test_scope_from_str() {
    assert_eq!("seeding".parse(), Ok(CohortScope::Seeding));
    assert_eq!("round-robin".parse(), Ok(CohortScope::RoundRobin));
    assert_eq!("Round_Robin".parse(), Ok(CohortScope::RoundRobin));
    assert!("playoffs".parse::<CohortScope>().is_err());
}

#[test]
fn test_load_missing_file() {
    let err = RankingConfig::load(Path::new("/nonexistent/ranking.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
