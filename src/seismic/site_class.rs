use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SpectrumError;

/// BNBC 2020 Table 6.2.16의 지반 분류 코드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteClass {
    SA,
    SB,
    SC,
    SD,
    SE,
}

impl SiteClass {
    /// 테이블 순서대로 나열한 전체 지반 분류.
    pub const ALL: [SiteClass; 5] = [
        SiteClass::SA,
        SiteClass::SB,
        SiteClass::SC,
        SiteClass::SD,
        SiteClass::SE,
    ];

    /// 알 수 없는 코드가 들어왔을 때 사용하는 기본 분류(단단한 토사).
    pub const FALLBACK: SiteClass = SiteClass::SD;

    pub fn code(self) -> &'static str {
        match self {
            SiteClass::SA => "SA",
            SiteClass::SB => "SB",
            SiteClass::SC => "SC",
            SiteClass::SD => "SD",
            SiteClass::SE => "SE",
        }
    }

    /// 지반 상태에 대한 짧은 설명(영문).
    pub fn description(self) -> &'static str {
        match self {
            SiteClass::SA => "rock or rock-like formation",
            SiteClass::SB => "very dense sand / very stiff clay",
            SiteClass::SC => "dense to medium-dense sand / stiff clay",
            SiteClass::SD => "stiff soil",
            SiteClass::SE => "soft soil layer over stiffer material",
        }
    }

    /// 테이블 코드와 정확히 일치할 때만 분류를 돌려준다(대소문자, 공백 구분).
    pub fn from_code(code: &str) -> Option<SiteClass> {
        SiteClass::ALL.iter().copied().find(|c| c.code() == code)
    }

    pub fn profile(self) -> &'static SiteClassProfile {
        // SITE_CLASS_PROFILES는 ALL과 같은 순서로 정의되어 있다.
        &SITE_CLASS_PROFILES[self as usize]
    }
}

impl fmt::Display for SiteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SiteClass {
    type Err = SpectrumError;

    /// 엄격한 파싱. 대소문자와 앞뒤 공백은 무시하지만 목록에 없는 코드는 오류로 돌려준다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        SiteClass::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| SpectrumError::InvalidSiteClass(code.to_string()))
    }
}

/// 지반 증폭계수와 스펙트럼 구간 경계 주기.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteClassProfile {
    pub class: SiteClass,
    /// 지반 증폭계수 S (무차원)
    pub soil_factor: f64,
    /// 가속도 일정 구간 시작 주기 TB [s]
    pub tb: f64,
    /// 가속도 일정 구간 종료 주기 TC [s]
    pub tc: f64,
    /// 변위 일정 구간 시작 주기 TD [s]
    pub td: f64,
}

const fn profile(class: SiteClass, soil_factor: f64, tb: f64, tc: f64, td: f64) -> SiteClassProfile {
    SiteClassProfile {
        class,
        soil_factor,
        tb,
        tc,
        td,
    }
}

static SITE_CLASS_PROFILES: [SiteClassProfile; 5] = [
    profile(SiteClass::SA, 1.00, 0.05, 0.25, 1.2),
    profile(SiteClass::SB, 1.20, 0.05, 0.35, 1.2),
    profile(SiteClass::SC, 1.15, 0.10, 0.45, 1.5),
    profile(SiteClass::SD, 1.35, 0.20, 0.85, 2.0),
    profile(SiteClass::SE, 1.40, 0.15, 0.50, 2.5),
];

pub fn site_class_profiles() -> &'static [SiteClassProfile] {
    &SITE_CLASS_PROFILES
}

/// 코드에 해당하는 프로파일을 돌려준다. 정확히 일치하지 않는 코드("se", " SA " 포함)는
/// SD 프로파일로 대체한다.
pub fn profile_or_default(code: &str) -> &'static SiteClassProfile {
    match SiteClass::from_code(code) {
        Some(class) => class.profile(),
        None => {
            tracing::debug!(code, fallback = %SiteClass::FALLBACK, "unknown site class, using fallback profile");
            SiteClass::FALLBACK.profile()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (class, p) in SiteClass::ALL.iter().zip(site_class_profiles()) {
            assert_eq!(*class, p.class);
            assert_eq!(class.profile().class, *class);
        }
    }

    #[test]
    fn period_bounds_are_ordered() {
        for p in site_class_profiles() {
            assert!(p.soil_factor > 0.0, "{}", p.class);
            assert!(0.0 < p.tb && p.tb < p.tc && p.tc < p.td, "{}", p.class);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" se ".parse::<SiteClass>().unwrap(), SiteClass::SE);
        assert_eq!("Sc".parse::<SiteClass>().unwrap(), SiteClass::SC);
    }

    #[test]
    fn parse_rejects_unknown_code() {
        match "ZZ".parse::<SiteClass>() {
            Err(SpectrumError::InvalidSiteClass(code)) => assert_eq!(code, "ZZ"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unknown_code_falls_back_to_sd() {
        assert_eq!(profile_or_default("ZZ"), SiteClass::SD.profile());
        assert_eq!(profile_or_default(""), SiteClass::SD.profile());
        assert_eq!(profile_or_default("SB").class, SiteClass::SB);
    }

    #[test]
    fn fallback_lookup_is_exact_match() {
        assert_eq!(profile_or_default("sb"), SiteClass::SD.profile());
        assert_eq!(profile_or_default(" SA "), SiteClass::SD.profile());
        assert_eq!(SiteClass::from_code("SE"), Some(SiteClass::SE));
        assert_eq!(SiteClass::from_code("se"), None);
    }
}
