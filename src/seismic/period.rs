use serde::{Deserialize, Serialize};

/// 근사 고유주기 계산용 구조 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureType {
    /// 철근콘크리트 모멘트 골조
    ConcreteMomentFrame,
    /// 강재 모멘트 골조
    SteelMomentFrame,
    /// 편심 가새 강골조
    EccentricallyBracedSteel,
    /// 그 밖의 구조
    Other,
}

impl StructureType {
    /// (Ct, m) 계수. 높이는 m 단위.
    pub fn coefficients(self) -> (f64, f64) {
        match self {
            StructureType::ConcreteMomentFrame => (0.0466, 0.9),
            StructureType::SteelMomentFrame => (0.0724, 0.8),
            StructureType::EccentricallyBracedSteel => (0.0731, 0.75),
            StructureType::Other => (0.0488, 0.75),
        }
    }
}

/// 건물 높이 hn[m]로부터 근사 고유주기 Ta = Ct·hn^m [s]를 추정한다.
pub fn approximate_period(height_m: f64, structure: StructureType) -> f64 {
    let (ct, m) = structure.coefficients();
    ct * height_m.max(0.0).powf(m)
}
