//! 스펙트럼 성질에 대한 속성 기반 테스트.
use design_spectrum_toolbox::seismic::{
    compute_spectrum, damping_correction, SiteClass, SpectrumRequest, ETA_FLOOR,
};
use proptest::prelude::*;

fn site_class() -> impl Strategy<Value = SiteClass> {
    prop::sample::select(SiteClass::ALL.to_vec())
}

proptest! {
    #[test]
    fn eta_is_non_increasing_and_floored(a in -4.9f64..1.0e4, b in -4.9f64..1.0e4) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let eta_lo = damping_correction(lo);
        let eta_hi = damping_correction(hi);
        prop_assert!(eta_lo >= eta_hi);
        prop_assert!(eta_hi >= ETA_FLOOR);
    }

    #[test]
    fn importance_scales_every_ordinate(
        class in site_class(),
        z in 0.1f64..0.4,
        damping in 0.0f64..30.0,
        k in 0.1f64..10.0,
    ) {
        let base = SpectrumRequest::new(z, class.code()).with_damping_ratio(damping);
        let one = compute_spectrum(&base);
        let scaled = compute_spectrum(&base.clone().with_importance(k));
        for (a, b) in one.points().iter().zip(scaled.points()) {
            prop_assert_eq!(a.period, b.period);
            let expected = a.spectral_acceleration * k;
            prop_assert!((b.spectral_acceleration - expected).abs() <= 1e-12 * expected.abs());
        }
    }

    #[test]
    fn peak_never_exceeds_plateau(class in site_class(), z in 0.1f64..0.4, damping in 0.0f64..30.0) {
        let req = SpectrumRequest::new(z, class.code()).with_damping_ratio(damping);
        let curve = compute_spectrum(&req);
        let plateau = 2.5 * z * class.profile().soil_factor * curve.eta;
        let peak = curve.peak().unwrap().spectral_acceleration;
        prop_assert!((peak - plateau).abs() <= 1e-12 * plateau);
    }
}
