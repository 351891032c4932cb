use mpesa_client::error::AppError;
use mpesa_client::utils::phone::normalize_msisdn;

#[test]
fn test_normalize_msisdn_accepts_international_form() {
    assert_eq!(normalize_msisdn("254712345678").unwrap(), "254712345678");
}

#[test]
fn test_normalize_msisdn_accepts_plus_prefix() {
    assert_eq!(normalize_msisdn("+254712345678").unwrap(), "254712345678");
}

#[test]
fn test_normalize_msisdn_accepts_local_form() {
    assert_eq!(normalize_msisdn("0712345678").unwrap(), "254712345678");
    assert_eq!(normalize_msisdn("0110345678").unwrap(), "254110345678");
}

#[test]
fn test_normalize_msisdn_ignores_spaces_and_dashes() {
    assert_eq!(normalize_msisdn("0712 345-678").unwrap(), "254712345678");
}

#[test]
fn test_normalize_msisdn_rejects_landline() {
    let err = normalize_msisdn("0201234567").unwrap_err();
    match err {
        AppError::InvalidArgument { field, value, .. } => {
            assert_eq!(field, "phone_number");
            assert_eq!(value, "0201234567");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_normalize_msisdn_rejects_wrong_length() {
    assert!(normalize_msisdn("25471234567").is_err());
    assert!(normalize_msisdn("2547123456789").is_err());
    assert!(normalize_msisdn("").is_err());
}
