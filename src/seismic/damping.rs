/// 감쇠 보정계수 η의 하한.
pub const ETA_FLOOR: f64 = 0.55;

/// 기준 감쇠비 [%]. 이 값에서 η = 1.0 이다.
pub const REFERENCE_DAMPING_PERCENT: f64 = 5.0;

/// 감쇠비(%)로부터 감쇠 보정계수 η를 계산한다.
///
/// η = sqrt(10 / (5 + ζ)) 를 구한 뒤 0.55 하한을 적용한다.
/// ζ <= -5 처럼 근호 안이 음수가 되는 입력은 검증하지 않으며 NaN이 그대로 전파된다.
pub fn damping_correction(damping_ratio_percent: f64) -> f64 {
    let eta = (10.0 / (REFERENCE_DAMPING_PERCENT + damping_ratio_percent)).sqrt();
    // f64::max는 NaN을 버리므로 직접 비교한다.
    if eta < ETA_FLOOR {
        ETA_FLOOR
    } else {
        eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_damping_gives_unity() {
        assert_eq!(damping_correction(5.0), 1.0);
    }

    #[test]
    fn low_damping_amplifies() {
        // ζ = 2% -> sqrt(10/7)
        let eta = damping_correction(2.0);
        assert!((eta - (10.0_f64 / 7.0).sqrt()).abs() < 1e-12);
        assert!(eta > 1.0);
    }

    #[test]
    fn floor_applies_after_square_root() {
        // sqrt(10/40) = 0.5 -> 0.55
        assert_eq!(damping_correction(35.0), ETA_FLOOR);
        assert_eq!(damping_correction(1.0e6), ETA_FLOOR);
    }

    #[test]
    fn negative_root_propagates_nan() {
        assert!(damping_correction(-10.0).is_nan());
    }
}
