//! 지진 설계 응답스펙트럼 관련 계산 모듈 모음.

pub mod damping;
pub mod period;
pub mod site_class;
pub mod spectrum;

pub use damping::*;
pub use period::*;
pub use site_class::*;
pub use spectrum::*;

/// 스펙트럼 입력 검증 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectrumError {
    /// 목록에 없는 지반 분류 코드(엄격 모드에서만 발생)
    #[error("unknown site class: {0}")]
    InvalidSiteClass(String),
    /// 범위를 벗어난 수치 입력
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
