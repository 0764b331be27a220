use super::digits_only;

pub const CPF_DIGITS: usize = 11;

/// Progressive CPF mask: `NNN.NNN.NNN-NN`, capped at 11 digits.
///
/// Punctuation is inserted only once the following digit has been typed,
/// so the field never shows a dangling separator.
pub fn format_cpf(input: &str) -> String {
    let mut out = String::with_capacity(14);
    for (i, c) in digits_only(input).chars().take(CPF_DIGITS).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Check-digit validation. Used as a hint only, never blocks a submit.
pub fn is_valid_cpf(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_DIGITS {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check = |len: usize| -> u32 {
        let weight_start = len as u32 + 1;
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        let rest = (sum * 10) % 11;
        if rest == 10 {
            0
        } else {
            rest
        }
    };

    check(9) == digits[9] && check(10) == digits[10]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progressive_mask() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("5"), "5");
        assert_eq!(format_cpf("529"), "529");
        assert_eq!(format_cpf("5299"), "529.9");
        assert_eq!(format_cpf("529982"), "529.982");
        assert_eq!(format_cpf("5299822"), "529.982.2");
        assert_eq!(format_cpf("529982247"), "529.982.247");
        assert_eq!(format_cpf("5299822472"), "529.982.247-2");
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn test_caps_at_eleven_digits() {
        assert_eq!(format_cpf("5299822472599"), "529.982.247-25");
    }

    #[test]
    fn test_idempotent_on_formatted_input() {
        let once = format_cpf("529.982.247-25");
        assert_eq!(once, "529.982.247-25");
        assert_eq!(format_cpf(&once), once);

        let partial = format_cpf("529.98");
        assert_eq!(format_cpf(&partial), partial);
    }

    #[test]
    fn test_ignores_non_digits() {
        assert_eq!(format_cpf("abc 529-982 247/25"), "529.982.247-25");
    }

    #[test]
    fn test_check_digits() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
        assert!(!is_valid_cpf("529.982.247-26"));
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("529.982.247"));
    }
}
