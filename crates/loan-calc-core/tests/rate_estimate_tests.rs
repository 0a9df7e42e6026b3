use loan_calc_core::rate_estimate::{
    estimate_rate, CreditGrade, EmploymentType, LoanPurpose, RateEstimateInput,
};
use loan_calc_core::LoanCalcError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn input(
    credit_score: u32,
    loan_purpose: LoanPurpose,
    annual_income: rust_decimal::Decimal,
    employment: EmploymentType,
) -> RateEstimateInput {
    RateEstimateInput {
        credit_score,
        loan_purpose,
        annual_income,
        employment,
    }
}

#[test]
fn test_base_rates_by_purpose() {
    // Neutral borrower: 700 score (-0.5), regular employment (0), 4,000 income (0)
    for (purpose, base) in [
        (LoanPurpose::Mortgage, dec!(3.5)),
        (LoanPurpose::Personal, dec!(6.5)),
        (LoanPurpose::Auto, dec!(4.5)),
        (LoanPurpose::Business, dec!(5.5)),
    ] {
        let out = estimate_rate(&input(700, purpose, dec!(4_000), EmploymentType::Regular))
            .unwrap()
            .result;
        assert_eq!(out.base_rate, base);
        assert_eq!(out.estimated_rate, base - dec!(0.5));
    }
}

#[test]
fn test_employment_adjustments() {
    for (employment, adj) in [
        (EmploymentType::Regular, dec!(0)),
        (EmploymentType::Contract, dec!(0.3)),
        (EmploymentType::Freelance, dec!(0.8)),
        (EmploymentType::Business, dec!(0.5)),
    ] {
        let out = estimate_rate(&input(700, LoanPurpose::Personal, dec!(4_000), employment))
            .unwrap()
            .result;
        assert_eq!(out.adjustments.employment, adj);
    }
}

#[test]
fn test_income_bands() {
    for (income, adj) in [
        (dec!(12_000), dec!(-0.3)),
        (dec!(8_000), dec!(-0.2)),
        (dec!(5_500), dec!(-0.1)),
        (dec!(4_000), dec!(0)),
        (dec!(2_500), dec!(0.2)),
    ] {
        let out = estimate_rate(&input(700, LoanPurpose::Personal, income, EmploymentType::Regular))
            .unwrap()
            .result;
        assert_eq!(out.adjustments.income, adj);
    }
}

#[test]
fn test_band_is_half_point_each_side() {
    let out = estimate_rate(&input(
        700,
        LoanPurpose::Personal,
        dec!(4_000),
        EmploymentType::Regular,
    ))
    .unwrap()
    .result;
    assert_eq!(out.min_rate, out.estimated_rate - dec!(0.5));
    assert_eq!(out.max_rate, out.estimated_rate + dec!(0.5));
}

#[test]
fn test_estimate_never_leaves_product_range() {
    // Best possible borrower on the cheapest product
    let best = estimate_rate(&input(
        999,
        LoanPurpose::Mortgage,
        dec!(20_000),
        EmploymentType::Regular,
    ))
    .unwrap()
    .result;
    assert!(best.estimated_rate >= dec!(1.0));
    assert!(best.min_rate >= dec!(1.0));

    // Worst possible borrower on the dearest product
    let worst = estimate_rate(&input(
        300,
        LoanPurpose::Personal,
        dec!(1_000),
        EmploymentType::Freelance,
    ))
    .unwrap()
    .result;
    assert!(worst.estimated_rate <= dec!(15.0));
    assert!(worst.max_rate <= dec!(15.0));
    assert_eq!(worst.credit_grade, CreditGrade::HighRisk);
}

#[test]
fn test_validation() {
    let err = estimate_rate(&input(299, LoanPurpose::Auto, dec!(4_000), EmploymentType::Regular))
        .unwrap_err();
    match err {
        LoanCalcError::InvalidInput { field, .. } => assert_eq!(field, "credit_score"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }

    let err = estimate_rate(&input(700, LoanPurpose::Auto, dec!(0), EmploymentType::Regular))
        .unwrap_err();
    match err {
        LoanCalcError::InvalidInput { field, .. } => assert_eq!(field, "annual_income"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_wire_enum_names() {
    let v = serde_json::to_value(LoanPurpose::Mortgage).unwrap();
    assert_eq!(v, serde_json::json!("mortgage"));
    let e: EmploymentType = serde_json::from_value(serde_json::json!("freelance")).unwrap();
    assert_eq!(e, EmploymentType::Freelance);
}
