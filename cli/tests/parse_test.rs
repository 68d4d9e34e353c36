use bitops_cli::{parse_hex_value, ParseValueError};

#[test]
fn plain_hex_digits() {
    assert_eq!(parse_hex_value("FF"), Ok(0xFF));
    assert_eq!(parse_hex_value("a"), Ok(0xA));
    assert_eq!(parse_hex_value("0"), Ok(0));
    assert_eq!(parse_hex_value("12345678"), Ok(0x1234_5678));
    assert_eq!(parse_hex_value("FFFFFFFF"), Ok(u32::MAX));
}

#[test]
fn prefixed_hex_digits() {
    assert_eq!(parse_hex_value("0xFF"), Ok(0xFF));
    assert_eq!(parse_hex_value("0X1e6a2c48"), Ok(0x1E6A_2C48));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        parse_hex_value("zz"),
        Err(ParseValueError::NotHexadecimal("zz".to_owned()))
    );
    assert_eq!(parse_hex_value(""), Err(ParseValueError::NotHexadecimal(String::new())));
    assert_eq!(parse_hex_value("0x"), Err(ParseValueError::NotHexadecimal("0x".to_owned())));
    assert_eq!(
        parse_hex_value("12 34"),
        Err(ParseValueError::NotHexadecimal("12 34".to_owned()))
    );
}

#[test]
fn values_wider_than_32_bits_are_rejected() {
    assert_eq!(
        parse_hex_value("100000000"),
        Err(ParseValueError::OutOfRange("100000000".to_owned()))
    );
    assert_eq!(parse_hex_value("0xFFFFFFFF"), Ok(u32::MAX));
}
