use proptest::prelude::*;

use super::*;
use crate::numeral::Malformed;

fn malformed(input: &str) -> bool {
    matches!(
        Converter::new(input),
        Err(ConvertError::MalformedNumber { .. })
    )
}

fn out_of_bounds(input: &str) -> bool {
    matches!(
        Converter::new(input),
        Err(ConvertError::ValueOutOfBounds { .. })
    )
}

#[test]
fn test_numeral_to_arabic() {
    assert_eq!(Converter::new("I").unwrap().to_arabic(), 1);
    assert_eq!(Converter::new("MMDZYJI").unwrap().to_arabic(), 2394);
    assert_eq!(Converter::new("MXXK").unwrap().to_arabic(), 1026);
    assert_eq!(Converter::new("MMEDZYKJ").unwrap().to_arabic(), 2999);
}

#[test]
fn test_arabic_to_numeral() {
    assert_eq!(Converter::new("1").unwrap().to_numeral(), "I");
    assert_eq!(Converter::new("2394").unwrap().to_numeral(), "MMDZYJI");
    assert_eq!(Converter::new("1026").unwrap().to_numeral(), "MXXK");
    assert_eq!(Converter::new("2999").unwrap().to_numeral(), "MMEDZYKJ");
}

#[test]
fn test_same_form_accessors_return_input() {
    let c = Converter::new("1500").unwrap();
    assert_eq!(c.form(), Form::Arabic);
    assert_eq!(c.to_arabic(), 1500);

    let c = Converter::new("  XKII ").unwrap();
    assert_eq!(c.form(), Form::Numeral);
    assert_eq!(c.input(), "XKII");
    assert_eq!(c.to_numeral(), "XKII");
    assert_eq!(c.to_arabic(), 18);
}

#[test]
fn test_out_of_bounds() {
    for input in ["0", "3000", "-10000", "10000", "-1", "-0", "+0", "99999999999999999999999"] {
        assert!(out_of_bounds(input), "{input} should be out of bounds");
    }
}

#[test]
fn test_in_bounds() {
    for input in ["1", "2999", "1500", "+42", "0042"] {
        assert!(Converter::new(input).is_ok(), "{input} should be accepted");
    }
    let c = Converter::new("0042").unwrap();
    assert_eq!(c.input(), "0042");
    assert_eq!(c.to_arabic(), 42);
    assert_eq!(c.to_numeral(), "YXII");
}

#[test]
fn test_malformed() {
    for input in [
        "MMM", "DD", "ABC", "mmdzyji", "MDE", "EDC", "ZYX", "KJI", "MM DZYJI", "", "   ", "+",
        "-", "12a", "1 2", "+-1", "IM",
    ] {
        assert!(malformed(input), "{input:?} should be malformed");
    }
}

#[test]
fn test_whitespace_is_trimmed() {
    let a = Converter::new(" 1026 ").unwrap();
    let b = Converter::new("1026").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_numeral(), "MXXK");

    let c = Converter::new("\tMXXK\n").unwrap();
    assert_eq!(c.input(), "MXXK");
    assert_eq!(c.to_arabic(), 1026);
}

#[test]
fn test_error_details() {
    let err = Converter::new(" MM DZYJI ").unwrap_err();
    assert_eq!(err.input(), "MM DZYJI");
    assert_eq!(
        err,
        ConvertError::MalformedNumber {
            input: "MM DZYJI".to_string(),
            reason: Malformed::InvalidCharacter {
                ch: ' ',
                position: 2
            },
        }
    );

    let err = Converter::new("3000").unwrap_err();
    assert_eq!(err.input(), "3000");
    assert_eq!(
        err.to_string(),
        "value 3000 is out of bounds, must be between 1 and 2999"
    );
}

#[test]
fn test_from_value() {
    let c = Converter::from_value(2394).unwrap();
    assert_eq!(c.input(), "2394");
    assert_eq!(c.to_numeral(), "MMDZYJI");
    assert!(matches!(
        Converter::from_value(0),
        Err(ConvertError::ValueOutOfBounds { .. })
    ));
    assert!(matches!(
        Converter::from_value(i64::MAX),
        Err(ConvertError::ValueOutOfBounds { .. })
    ));
}

#[test]
fn test_accessors_are_repeatable() {
    let c = Converter::new("MMDZYJI").unwrap();
    for _ in 0..3 {
        assert_eq!(c.to_arabic(), 2394);
        assert_eq!(c.to_numeral(), "MMDZYJI");
    }
}

#[test]
fn test_std_conversions() {
    let c: Converter = "MXXK".parse().unwrap();
    assert_eq!(c.to_string(), "MXXK");
    let c = Converter::try_from(String::from(" 7 ")).unwrap();
    assert_eq!(String::from(c), "7");
    assert!(Converter::try_from("MMM").is_err());
}

#[test]
fn test_serde() {
    let c = Converter::new("MXXK").unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"MXXK\"");

    let c: Converter = serde_json::from_str("\" 2394 \"").unwrap();
    assert_eq!(c.to_numeral(), "MMDZYJI");

    assert!(serde_json::from_str::<Converter>("\"MDE\"").is_err());
    assert!(serde_json::from_str::<Converter>("\"0\"").is_err());
}

#[test]
fn test_integer_round_trip() {
    for n in MIN_VALUE..=MAX_VALUE {
        let numeral = Converter::new(&n.to_string()).unwrap().to_numeral();
        let back = Converter::new(&numeral).unwrap();
        assert_eq!(back.form(), Form::Numeral);
        assert_eq!(back.to_arabic(), n);
    }
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,16}") {
        if let Ok(c) = Converter::new(&input) {
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&c.to_arabic()));
        }
    }

    #[test]
    fn accepted_numerals_are_non_increasing(input in "[MEDCZYXKJI]{1,12}") {
        if let Ok(c) = Converter::new(&input) {
            let values: Vec<u16> = c
                .input()
                .chars()
                .filter_map(crate::symbol::Symbol::from_char)
                .map(|s| s.value())
                .collect();
            prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
            prop_assert!((MIN_VALUE..=MAX_VALUE).contains(&c.to_arabic()));
        }
    }

    #[test]
    fn signed_decimals_classify_as_arabic(n in -100_000i64..100_000) {
        match Converter::new(&n.to_string()) {
            Ok(c) => {
                prop_assert_eq!(c.form(), Form::Arabic);
                prop_assert_eq!(i64::from(c.to_arabic()), n);
            }
            Err(e) => {
                let out_of_bounds = matches!(e, ConvertError::ValueOutOfBounds { .. });
                prop_assert!(out_of_bounds, "unexpected error {}", e);
            }
        }
    }
}
