//! Validation and display formatting for the CNPJ, the Brazilian company
//! registry identifier: 14 digits where the last two are mod-11 check digits.
//!
//! Both functions are total over arbitrary strings. They strip punctuation
//! themselves and degrade gracefully on malformed input instead of erroring,
//! so callers can feed them raw form input.

// Weights for the weighted sum of each check digit. The official scheme
// starts at `length - 7` and decrements, wrapping to 9 below 2; the sequences
// are kept as fixed tables instead of re-deriving that loop.
const FIRST_CHECK_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_CHECK_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Digit-only form of an identifier. Validation, formatting and repository
/// filters all compare identifiers in this form.
pub fn strip_cnpj(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digits_of(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights.iter()).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Whether `value` is a valid CNPJ. Punctuation is ignored; anything whose
/// digit-only form is not exactly 14 digits is invalid, as is a run of a
/// single repeated digit (which would otherwise satisfy the checksum).
pub fn validate_cnpj(value: &str) -> bool {
    let digits = digits_of(value);
    if digits.len() != 14 {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }
    check_digit(&digits[..12], &FIRST_CHECK_WEIGHTS) == digits[12]
        && check_digit(&digits[..13], &SECOND_CHECK_WEIGHTS) == digits[13]
}

/// Renders a 14-digit identifier as `XX.XXX.XXX/XXXX-XX`. Input with any
/// other digit count is returned unchanged; no validation happens here, a
/// caller that cares about correctness runs [`validate_cnpj`] separately.
pub fn format_cnpj(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let digits = strip_cnpj(value);
    if digits.len() != 14 {
        return value.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_valid_identifiers() {
        let valid = vec![
            "11222333000181",
            "11.222.333/0001-81",
            "06990590000123",
            "06.990.590/0001-23",
            "00000000000191",
        ];
        for cnpj in valid {
            assert!(validate_cnpj(cnpj), "expected {} to be valid", cnpj);
        }
    }

    #[test]
    fn rejects_corrupted_check_digits() {
        let invalid = vec![
            // last digit off by one
            "11222333000180",
            // first check digit corrupted
            "11222333000171",
            "06990590000124",
            "00.000.000/0001-92",
        ];
        for cnpj in invalid {
            assert!(!validate_cnpj(cnpj), "expected {} to be invalid", cnpj);
        }
    }

    #[test]
    fn rejects_wrong_length() {
        let invalid = vec!["", "123", "1122233300018", "112223330001811", "not a cnpj"];
        for cnpj in invalid {
            assert!(!validate_cnpj(cnpj), "expected {} to be invalid", cnpj);
        }
    }

    #[test]
    fn rejects_repeated_digit_runs() {
        assert!(!validate_cnpj("11111111111111"));
        assert!(!validate_cnpj("00000000000000"));
        assert!(!validate_cnpj("11.111.111/1111-11"));
    }

    #[test]
    fn formats_complete_identifiers() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("11-222-333-0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn passes_through_incomplete_input() {
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_cnpj("123"), "123");
        assert_eq!(format_cnpj("112223330001"), "112223330001");
    }

    #[test]
    fn formatting_preserves_validity() {
        let samples = vec![
            "11222333000181",
            "11222333000180",
            "11111111111111",
            "123",
            "",
        ];
        for cnpj in samples {
            assert_eq!(validate_cnpj(cnpj), validate_cnpj(&format_cnpj(cnpj)));
        }
    }
}
