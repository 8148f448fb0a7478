//! 건물 위험도 분류와 설정 파일 회귀 테스트.
use design_spectrum_toolbox::{
    building::{BuildingProfile, FixedSpatialProvider, SpatialMetadataProvider},
    config,
    seismic::{SpectrumRequest, StructureType},
    triage::{assess_building, RiskLevel, TriageThresholds},
};

#[test]
fn dhaka_reference_building_is_critical() {
    let building = FixedSpatialProvider::default().fetch(23.7104, 90.4074);
    let res = assess_building(
        &SpectrumRequest::new(0.20, "SD"),
        building,
        StructureType::ConcreteMomentFrame,
        &TriageThresholds::default(),
    );
    assert_eq!(res.risk, RiskLevel::Critical);
    assert!((res.peak_sa_g - 0.675).abs() < 1e-9);
    // Ta ≈ 0.647 s 는 SD 가속도 일정 구간(0.20~0.85 s)에 있다
    assert!((res.approximate_period_s - 0.647).abs() < 1e-3);
    assert!((res.sa_at_period_g - 0.675).abs() < 1e-9);
}

#[test]
fn low_rise_building_is_standard() {
    let building = BuildingProfile {
        levels: 3,
        height_m: 9.3,
        footprint: 800.0,
    };
    let res = assess_building(
        &SpectrumRequest::new(0.36, "SE").with_importance(1.5),
        building,
        StructureType::Other,
        &TriageThresholds::default(),
    );
    assert_eq!(res.risk, RiskLevel::Standard);
}

#[test]
fn soft_zone_is_standard_even_for_tall_building() {
    // 0.12 * 1.0 * 2.5 = 0.30 g < 0.45 g
    let res = assess_building(
        &SpectrumRequest::new(0.12, "SA"),
        FixedSpatialProvider::default().fetch(0.0, 0.0),
        StructureType::SteelMomentFrame,
        &TriageThresholds::default(),
    );
    assert_eq!(res.risk, RiskLevel::Standard);
}

#[test]
fn config_roundtrips_through_toml_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let created = config::load_or_default_at(&path).expect("defaults");
    assert_eq!(created, config::Config::default());
    assert!(!path.exists());

    let mut cfg = created;
    cfg.language = "en-us".into();
    cfg.defaults.site_class = "SC".into();
    cfg.triage.height_threshold_m = 20.0;
    config::save_to(&cfg, &path).expect("save");

    let loaded = config::load_or_default_at(&path).expect("reload");
    assert_eq!(loaded, cfg);
}

#[test]
fn missing_config_is_not_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");
    let cfg = config::load_or_default_at(&path).expect("defaults without writing");
    assert_eq!(cfg, config::Config::default());
    assert!(!path.exists());
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "defaults = 3").expect("write");
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
