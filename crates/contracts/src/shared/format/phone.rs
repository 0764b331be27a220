use super::digits_only;

const PHONE_DIGITS: usize = 11;

/// Brazilian phone mask: `(NN) NNNN-NNNN` for landlines,
/// `(NN) NNNNN-NNNN` once the eleventh digit arrives.
pub fn format_phone(input: &str) -> String {
    let digits: String = digits_only(input).chars().take(PHONE_DIGITS).collect();
    let len = digits.len();

    match len {
        0 => String::new(),
        1..=2 => format!("({}", digits),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_mask() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1134567890"), "(11) 3456-7890");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_phone_mask_is_idempotent() {
        let formatted = format_phone("11987654321");
        assert_eq!(format_phone(&formatted), formatted);
    }
}
