//! 스펙트럼 최대값과 건물 높이로 위험도를 분류한다.

use serde::{Deserialize, Serialize};

use crate::building::BuildingProfile;
use crate::seismic::{approximate_period, DesignSpectrum, SpectrumRequest, StructureType};

/// 위험도 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Critical,
    Standard,
}

/// 분류 임계값. 두 조건을 모두 초과해야 Critical이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageThresholds {
    /// 최대 Sa 임계값 [g]
    pub peak_sa_threshold_g: f64,
    /// 건물 높이 임계값 [m]
    pub height_threshold_m: f64,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self {
            peak_sa_threshold_g: 0.45,
            height_threshold_m: 15.0,
        }
    }
}

/// 최대 Sa와 건물 높이로 위험도를 분류한다(둘 다 초과 비교).
pub fn classify(peak_sa_g: f64, height_m: f64, thresholds: &TriageThresholds) -> RiskLevel {
    if peak_sa_g > thresholds.peak_sa_threshold_g && height_m > thresholds.height_threshold_m {
        RiskLevel::Critical
    } else {
        RiskLevel::Standard
    }
}

/// 건물 하나에 대한 평가 결과.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingAssessment {
    pub building: BuildingProfile,
    pub structure: StructureType,
    /// 곡선 최대 Sa [g]
    pub peak_sa_g: f64,
    /// 근사 고유주기 Ta [s]
    pub approximate_period_s: f64,
    /// Ta에서의 설계 Sa [g]
    pub sa_at_period_g: f64,
    pub risk: RiskLevel,
}

/// 스펙트럼을 계산하고 건물 정보와 결합해 평가한다.
pub fn assess_building(
    request: &SpectrumRequest,
    building: BuildingProfile,
    structure: StructureType,
    thresholds: &TriageThresholds,
) -> BuildingAssessment {
    let spectrum = DesignSpectrum::from_request(request);
    let peak_sa_g = spectrum
        .curve()
        .peak()
        .map(|p| p.spectral_acceleration)
        .unwrap_or(0.0);
    let ta = approximate_period(building.height_m, structure);
    let risk = classify(peak_sa_g, building.height_m, thresholds);
    tracing::info!(peak_sa_g, height_m = building.height_m, ?risk, "building triaged");
    BuildingAssessment {
        building,
        structure,
        peak_sa_g,
        approximate_period_s: ta,
        sa_at_period_g: spectrum.spectral_acceleration(ta),
        risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_thresholds_must_be_exceeded() {
        let t = TriageThresholds::default();
        assert_eq!(classify(0.675, 18.6, &t), RiskLevel::Critical);
        assert_eq!(classify(0.675, 12.0, &t), RiskLevel::Standard);
        assert_eq!(classify(0.30, 18.6, &t), RiskLevel::Standard);
    }

    #[test]
    fn thresholds_are_strict() {
        let t = TriageThresholds::default();
        assert_eq!(classify(0.45, 18.6, &t), RiskLevel::Standard);
        assert_eq!(classify(0.675, 15.0, &t), RiskLevel::Standard);
    }
}
