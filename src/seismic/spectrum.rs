//! BNBC 2020 Figure 6.2.25 설계 응답스펙트럼 계산.
//!
//! 주기 T에 따라 네 구간 중 하나를 선택한다(경계 주기는 아래 구간에 속한다).
//!
//! ```text
//! T <= TB       : Sa = Z·S·(1 + (T/TB)·(2.5η − 1))
//! TB < T <= TC  : Sa = 2.5·Z·S·η
//! TC < T <= TD  : Sa = 2.5·Z·S·η·(TC/T)
//! T > TD        : Sa = 2.5·Z·S·η·(TC·TD/T²)
//! ```
//!
//! 모든 구간 결과에 중요도계수 I를 곱한다.

use serde::Serialize;

use super::damping::{damping_correction, REFERENCE_DAMPING_PERCENT};
use super::site_class::{profile_or_default, SiteClass, SiteClassProfile};
use super::SpectrumError;

/// 샘플링 주기 구간 시작 [s]
pub const PERIOD_MIN_S: f64 = 0.01;
/// 샘플링 주기 구간 끝 [s]
pub const PERIOD_MAX_S: f64 = 4.0;
/// 스펙트럼 샘플 수
pub const SAMPLE_COUNT: usize = 200;

const PLATEAU_AMPLIFICATION: f64 = 2.5;

/// 닫힌 구간 [start, end]를 같은 간격으로 나눈 주기 열.
///
/// 마지막 값은 누적 오차 없이 `end`와 정확히 같다. `Clone`으로 언제든 처음부터 다시 돌릴 수 있다.
#[derive(Debug, Clone)]
pub struct PeriodGrid {
    start: f64,
    end: f64,
    count: usize,
    index: usize,
}

impl PeriodGrid {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self {
            start,
            end,
            count,
            index: 0,
        }
    }

    /// 0.01~4.0 s, 200점 기본 그리드.
    pub fn standard() -> Self {
        Self::new(PERIOD_MIN_S, PERIOD_MAX_S, SAMPLE_COUNT)
    }

    fn value_at(&self, i: usize) -> f64 {
        if self.count == 1 {
            return self.start;
        }
        if i + 1 == self.count {
            return self.end;
        }
        let step = (self.end - self.start) / (self.count - 1) as f64;
        self.start + i as f64 * step
    }
}

impl Iterator for PeriodGrid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let v = self.value_at(self.index);
        self.index += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeriodGrid {}

/// 주기가 속한 스펙트럼 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpectrumBranch {
    /// 0 ~ TB 선형 증가 구간
    Ramp,
    /// TB ~ TC 가속도 일정 구간
    Plateau,
    /// TC ~ TD 1/T 감소 구간
    VelocityDecay,
    /// TD 이후 1/T² 감소 구간
    DisplacementDecay,
}

impl SpectrumBranch {
    pub fn classify(period: f64, profile: &SiteClassProfile) -> Self {
        if period <= profile.tb {
            SpectrumBranch::Ramp
        } else if period <= profile.tc {
            SpectrumBranch::Plateau
        } else if period <= profile.td {
            SpectrumBranch::VelocityDecay
        } else {
            SpectrumBranch::DisplacementDecay
        }
    }
}

/// 스펙트럼 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumRequest {
    /// 지역계수 Z [g]
    pub zone_coefficient: f64,
    /// 지반 분류 코드. 알 수 없는 코드는 SD로 계산된다.
    pub site_class: String,
    /// 중요도계수 I
    pub importance: f64,
    /// 감쇠비 ζ [%]
    pub damping_ratio: f64,
}

impl SpectrumRequest {
    /// 중요도 1.0, 감쇠비 5%를 기본값으로 요청을 만든다.
    pub fn new(zone_coefficient: f64, site_class: impl Into<String>) -> Self {
        Self {
            zone_coefficient,
            site_class: site_class.into(),
            importance: 1.0,
            damping_ratio: REFERENCE_DAMPING_PERCENT,
        }
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f64) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    /// 계산 자체는 입력을 검증하지 않는다. 호출 측에서 값 범위를 강제하고 싶을 때 사용한다.
    ///
    /// 지반 분류 코드는 검사하지 않는다(엄격 모드는 `SiteClass::from_str` 사용).
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if !self.zone_coefficient.is_finite() || self.zone_coefficient <= 0.0 {
            return Err(SpectrumError::InvalidInput(
                "zone coefficient must be a positive finite number",
            ));
        }
        if !self.importance.is_finite() || self.importance <= 0.0 {
            return Err(SpectrumError::InvalidInput(
                "importance factor must be a positive finite number",
            ));
        }
        if !self.damping_ratio.is_finite() || self.damping_ratio <= -REFERENCE_DAMPING_PERCENT {
            return Err(SpectrumError::InvalidInput(
                "damping ratio must be finite and greater than -5 %",
            ));
        }
        Ok(())
    }
}

/// 스펙트럼 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumPoint {
    /// 주기 T [s]
    pub period: f64,
    /// 스펙트럼 가속도 Sa [g]
    pub spectral_acceleration: f64,
}

/// 입력을 해석해 계수를 고정한 설계 스펙트럼. 임의 주기의 Sa를 계산할 수 있다.
#[derive(Debug, Clone, Copy)]
pub struct DesignSpectrum {
    pub zone_coefficient: f64,
    pub profile: &'static SiteClassProfile,
    pub importance: f64,
    pub eta: f64,
}

impl DesignSpectrum {
    pub fn from_request(request: &SpectrumRequest) -> Self {
        Self {
            zone_coefficient: request.zone_coefficient,
            profile: profile_or_default(&request.site_class),
            importance: request.importance,
            eta: damping_correction(request.damping_ratio),
        }
    }

    /// 가속도 일정 구간 값 2.5·Z·S·η·I
    pub fn plateau(&self) -> f64 {
        PLATEAU_AMPLIFICATION * self.zone_coefficient * self.profile.soil_factor * self.eta * self.importance
    }

    /// 주기 하나에 대한 Sa [g].
    pub fn spectral_acceleration(&self, period: f64) -> f64 {
        let p = self.profile;
        let zs = self.zone_coefficient * p.soil_factor;
        let peak = PLATEAU_AMPLIFICATION * zs * self.eta;
        let sa = match SpectrumBranch::classify(period, p) {
            SpectrumBranch::Ramp => {
                zs * (1.0 + (period / p.tb) * (PLATEAU_AMPLIFICATION * self.eta - 1.0))
            }
            SpectrumBranch::Plateau => peak,
            SpectrumBranch::VelocityDecay => peak * (p.tc / period),
            SpectrumBranch::DisplacementDecay => peak * (p.tc * p.td / (period * period)),
        };
        sa * self.importance
    }

    /// 주어진 주기 열에 대해 곡선을 만든다.
    pub fn sample(&self, periods: impl IntoIterator<Item = f64>) -> SpectrumCurve {
        let points = periods
            .into_iter()
            .map(|period| SpectrumPoint {
                period,
                spectral_acceleration: self.spectral_acceleration(period),
            })
            .collect();
        SpectrumCurve {
            site_class: self.profile.class,
            eta: self.eta,
            points,
        }
    }

    pub fn curve(&self) -> SpectrumCurve {
        self.sample(PeriodGrid::standard())
    }
}

/// 계산된 스펙트럼 곡선. 주기 오름차순으로 정렬되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumCurve {
    /// 실제 계산에 사용된 지반 분류(대체된 경우 SD)
    pub site_class: SiteClass,
    /// 적용된 감쇠 보정계수
    pub eta: f64,
    pub points: Vec<SpectrumPoint>,
}

impl SpectrumCurve {
    pub fn points(&self) -> &[SpectrumPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn periods(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.period)
    }

    pub fn accelerations(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.spectral_acceleration)
    }

    /// 최대 Sa를 갖는 첫 번째 점.
    pub fn peak(&self) -> Option<SpectrumPoint> {
        self.points.iter().copied().reduce(|best, p| {
            if p.spectral_acceleration.total_cmp(&best.spectral_acceleration).is_gt() {
                p
            } else {
                best
            }
        })
    }
}

/// 설계 응답스펙트럼을 계산한다. 어떤 입력에도 실패하지 않으며 항상 200점을 돌려준다.
pub fn compute_spectrum(request: &SpectrumRequest) -> SpectrumCurve {
    DesignSpectrum::from_request(request).curve()
}
