use super::{Amount, AmountError};
use anyhow::Result;

#[test]
fn test_amount_accepts_non_negative_values() -> Result<()> {
    let test_cases = vec![
        (0.0, "0"),
        (100.0, "100"),
        (900.5, "900.5"),
        (181000.0, "181000"),
    ];

    for (input, expected_output) in test_cases {
        assert_eq!(Amount::try_from(input)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_keeps_the_exact_input_value() -> Result<()> {
    let test_cases = [1e29, 1e-30, 5e-324, 0.1 + 0.2, 123456789.123456789, f64::MAX];

    for input in test_cases {
        assert_eq!(Amount::try_from(input)?.to_f64().to_bits(), input.to_bits(), "input: {input:e}");
    }

    Ok(())
}

#[test]
fn test_amount_rejects_negative_values() {
    assert_eq!(Amount::try_from(-5.0), Err(AmountError::Negative(-5.0)));
    assert_eq!(Amount::try_from(-0.0001), Err(AmountError::Negative(-0.0001)));
    assert_eq!(Amount::try_from(-5e-324), Err(AmountError::Negative(-5e-324)));
}

#[test]
fn test_amount_normalizes_negative_zero() -> Result<()> {
    let amount = Amount::try_from(-0.0)?;

    assert_eq!(amount.to_string(), "0");
    assert!(amount.to_f64().is_sign_positive());

    Ok(())
}

#[test]
fn test_amount_rejects_non_finite_floats() {
    assert!(matches!(Amount::try_from(f64::NAN), Err(AmountError::NotFinite(_))));
    assert!(matches!(Amount::try_from(f64::INFINITY), Err(AmountError::NotFinite(_))));
    assert!(matches!(Amount::try_from(f64::NEG_INFINITY), Err(AmountError::NotFinite(_))));
}
