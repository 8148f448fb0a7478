use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::seismic::SpectrumRequest;
use crate::triage::TriageThresholds;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 스펙트럼 입력 기본값. CLI에서 값을 생략하면 여기서 가져온다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumDefaults {
    pub zone_coefficient: f64,
    pub site_class: String,
    pub importance: f64,
    pub damping_ratio: f64,
}

impl Default for SpectrumDefaults {
    fn default() -> Self {
        Self {
            zone_coefficient: 0.20,
            site_class: "SD".to_string(),
            importance: 1.0,
            damping_ratio: 5.0,
        }
    }
}

impl SpectrumDefaults {
    pub fn to_request(&self) -> SpectrumRequest {
        SpectrumRequest::new(self.zone_coefficient, self.site_class.clone())
            .with_importance(self.importance)
            .with_damping_ratio(self.damping_ratio)
    }
}

/// 건물 조회 기본 좌표(Puran Dhaka).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 23.7104,
            longitude: 90.4074,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en-us)
    pub language: String,
    pub defaults: SpectrumDefaults,
    pub location: Location,
    pub triage: TriageThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: SpectrumDefaults::default(),
            location: Location::default(),
            triage: TriageThresholds::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 메모리상의 기본값을 돌려주며 파일은 만들지 않는다.
/// 기본 설정 파일은 `config init`에서만 기록한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let cfg = load_from(path)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        tracing::debug!(path = %path.display(), "config file missing, using defaults");
        Ok(Config::default())
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

pub fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "ko"
            [defaults]
            site_class = "SE"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.defaults.site_class, "SE");
        assert_eq!(cfg.defaults.zone_coefficient, 0.20);
        assert_eq!(cfg.triage, TriageThresholds::default());
    }

    #[test]
    fn defaults_build_reference_request() {
        let req = SpectrumDefaults::default().to_request();
        assert_eq!(req, SpectrumRequest::new(0.20, "SD"));
    }
}
