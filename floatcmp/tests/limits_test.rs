use floatcmp::{group_thousands, limits_line, DecimalLimits};

#[test]
fn grouping_small_and_exact_multiples() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(7), "7");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1_000), "1,000");
    assert_eq!(group_thousands(123_456), "123,456");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn grouping_negative_values() {
    assert_eq!(group_thousands(-1), "-1");
    assert_eq!(group_thousands(-1_000), "-1,000");
    assert_eq!(group_thousands(i32::MIN), "-2,147,483,648");
}

#[test]
fn grouping_type_extremes() {
    assert_eq!(group_thousands(i32::MAX), "2,147,483,647");
    assert_eq!(group_thousands(u32::MAX), "4,294,967,295");
    assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
}

#[test]
fn digits10_constants() {
    assert_eq!(i32::DIGITS10, 9);
    assert_eq!(u32::DIGITS10, 9);
    assert_eq!(i64::DIGITS10, 18);
    assert_eq!(u64::DIGITS10, 19);
}

#[test]
fn limit_values_come_from_the_type() {
    assert_eq!(<i32 as DecimalLimits>::min_value(), i32::MIN);
    assert_eq!(<u64 as DecimalLimits>::max_value(), u64::MAX);
    assert_eq!(<u32 as DecimalLimits>::min_value(), 0);
}

#[test]
fn limits_line_layout() {
    assert_eq!(
        limits_line::<i32>("int"),
        "int digits: 9; min=-2,147,483,648; max=2,147,483,647"
    );
    assert_eq!(
        limits_line::<u32>("unsigned int"),
        "unsigned int digits: 9; min=0; max=4,294,967,295"
    );
}
