//! A curve that follows the global evaluation date.
//!
//! Kept in its own test binary: it changes process-wide settings.

use std::sync::Arc;
use yc_core::{LazyObject, ScopedEvaluationDate};
use yc_math::LogLinear;
use yc_termstructures::{
    BootstrapConfig, CurveKind, DepositRateHelper, PiecewiseYieldCurve, RateHelper, TermStructure,
    YieldTermStructure,
};
use yc_time::{Actual360, Date, Period};

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

#[test]
fn test_reference_date_follows_evaluation_date() {
    let _guard = ScopedEvaluationDate::new(date(2024, 1, 15).naive());
    let settlement = date(2024, 1, 17);
    let helpers: Vec<Arc<dyn RateHelper>> = [(1, 0.0458), (3, 0.0456), (6, 0.0450)]
        .into_iter()
        .map(|(months, rate)| -> Arc<dyn RateHelper> {
            Arc::new(
                DepositRateHelper::from_tenor(rate, settlement, Period::months(months), Actual360)
                    .unwrap(),
            )
        })
        .collect();
    let maturity = helpers[2].latest_date();
    let curve = PiecewiseYieldCurve::floating(
        CurveKind::Discount,
        2,
        helpers,
        Actual360,
        LogLinear,
        BootstrapConfig::default(),
    )
    .unwrap();

    assert_eq!(curve.reference_date().unwrap(), settlement);
    let before = curve.discount_date(maturity).unwrap();
    for helper in curve.instruments() {
        assert!(helper.quote_error(&curve).unwrap().abs() < 1e-9);
    }

    // the deposits now settle two days after the reference date
    let _earlier = ScopedEvaluationDate::new(date(2024, 1, 13).naive());
    assert!(!curve.is_calculated());
    assert_eq!(curve.reference_date().unwrap(), date(2024, 1, 15));
    assert_eq!(curve.dates().unwrap()[0], date(2024, 1, 15));
    let after = curve.discount_date(maturity).unwrap();
    assert!(after < before);
    for helper in curve.instruments() {
        assert!(helper.quote_error(&curve).unwrap().abs() < 1e-9);
    }

    // every instrument has expired
    let _late = ScopedEvaluationDate::new(date(2024, 12, 31).naive());
    assert!(curve.data().unwrap_err().is_configuration());
}
