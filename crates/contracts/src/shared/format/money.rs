//! Currency helpers. Amounts travel as integer cents.

use super::digits_only;

// Up to 999 trillion reais, well below i64::MAX cents
const MAX_INPUT_DIGITS: usize = 17;

/// Format cents as `R$ 1.234,56`
pub fn format_brl(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let reais = (abs / 100).to_string();
    let frac = abs % 100;

    // group thousands from the right with '.'
    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, c) in reais.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let reais: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {},{:02}", reais, frac)
    } else {
        format!("R$ {},{:02}", reais, frac)
    }
}

/// Mask for a currency text field: typed digits are read as cents.
/// `"1"` -> `"R$ 0,01"`, `"123456"` -> `"R$ 1.234,56"`.
pub fn currency_input(raw: &str) -> String {
    let digits: String = digits_only(raw)
        .trim_start_matches('0')
        .chars()
        .take(MAX_INPUT_DIGITS)
        .collect();
    if digits.is_empty() {
        return if raw.chars().any(|c| c == '0') {
            format_brl(0)
        } else {
            String::new()
        };
    }
    match digits.parse::<i64>() {
        Ok(cents) => format_brl(cents),
        Err(_) => String::new(),
    }
}

/// Parse `R$ 1.234,56`, `1234,56` or `1234.56` into cents.
pub fn parse_brl(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let body = rest.trim().trim_start_matches("R$").trim();
    if body.is_empty() {
        return None;
    }

    let (int_part, frac_part) = if let Some((int_part, frac)) = body.rsplit_once(',') {
        (int_part.replace('.', ""), frac.to_string())
    } else {
        match body.rsplit_once('.') {
            Some((int_part, frac)) if frac.len() <= 2 => {
                (int_part.replace('.', ""), frac.to_string())
            }
            _ => (body.replace('.', ""), String::new()),
        }
    };

    if frac_part.len() > 2 {
        return None;
    }
    let int_part = if int_part.is_empty() { "0".to_string() } else { int_part };
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let reais: i64 = int_part.parse().ok()?;
    let cents: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().ok()? * 10,
        _ => frac_part.parse().ok()?,
    };
    let total = reais.checked_mul(100)?.checked_add(cents)?;
    Some(if negative { -total } else { total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(123456), "R$ 1.234,56");
        assert_eq!(format_brl(123456789), "R$ 1.234.567,89");
        assert_eq!(format_brl(-150000), "-R$ 1.500,00");
    }

    #[test]
    fn test_currency_input_reads_digits_as_cents() {
        assert_eq!(currency_input(""), "");
        assert_eq!(currency_input("1"), "R$ 0,01");
        assert_eq!(currency_input("123456"), "R$ 1.234,56");
        assert_eq!(currency_input("R$ 1.234,567"), "R$ 12.345,67");
        assert_eq!(currency_input("R$ 0,00"), "R$ 0,00");
    }

    #[test]
    fn test_currency_input_is_stable_on_its_own_output() {
        let masked = currency_input("98765");
        assert_eq!(currency_input(&masked), masked);
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl("R$ 1.234,56"), Some(123456));
        assert_eq!(parse_brl("1234,5"), Some(123450));
        assert_eq!(parse_brl("1234.56"), Some(123456));
        assert_eq!(parse_brl("1.234"), Some(123400));
        assert_eq!(parse_brl("-R$ 10,00"), Some(-1000));
        assert_eq!(parse_brl(""), None);
        assert_eq!(parse_brl("abc"), None);
        assert_eq!(parse_brl("1,234"), None);
    }

    #[test]
    fn test_parse_reads_back_formatted_value() {
        assert_eq!(parse_brl(&format_brl(987654321)), Some(987654321));
    }
}
