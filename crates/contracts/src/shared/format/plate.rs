use serde::{Deserialize, Serialize};

const PLATE_SLOTS: usize = 7;

/// License-plate mask selected in the vehicle form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlateFormat {
    /// `AAA9A99`
    #[default]
    Mercosul,
    /// `AAA-9999`
    Old,
}

#[derive(Clone, Copy)]
enum Slot {
    Letter,
    Digit,
}

impl Slot {
    fn accepts(self, c: char) -> bool {
        match self {
            Slot::Letter => c.is_ascii_alphabetic(),
            Slot::Digit => c.is_ascii_digit(),
        }
    }
}

impl PlateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlateFormat::Mercosul => "mercosul",
            PlateFormat::Old => "old",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlateFormat::Mercosul => "Mercosul (ABC1D23)",
            PlateFormat::Old => "Antiga (ABC-1234)",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "old" => PlateFormat::Old,
            _ => PlateFormat::Mercosul,
        }
    }

    pub fn all() -> [PlateFormat; 2] {
        [PlateFormat::Mercosul, PlateFormat::Old]
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PlateFormat::Mercosul => "ABC1D23",
            PlateFormat::Old => "ABC-1234",
        }
    }

    fn slots(&self) -> [Slot; PLATE_SLOTS] {
        use Slot::*;
        match self {
            PlateFormat::Mercosul => [Letter, Letter, Letter, Digit, Letter, Digit, Digit],
            PlateFormat::Old => [Letter, Letter, Letter, Digit, Digit, Digit, Digit],
        }
    }

    /// Guess the mask of a stored plate from its fifth character.
    pub fn detect(plate: &str) -> Self {
        match normalized(plate).chars().nth(4) {
            Some(c) if c.is_ascii_digit() => PlateFormat::Old,
            _ => PlateFormat::Mercosul,
        }
    }
}

fn normalized(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Apply the selected mask. Characters that do not fit the next slot are dropped.
pub fn format_plate(input: &str, format: PlateFormat) -> String {
    let slots = format.slots();
    let mut out = String::with_capacity(PLATE_SLOTS + 1);
    let mut filled = 0;

    for c in normalized(input).chars() {
        if filled == PLATE_SLOTS {
            break;
        }
        if !slots[filled].accepts(c) {
            continue;
        }
        if format == PlateFormat::Old && filled == 3 {
            out.push('-');
        }
        out.push(c);
        filled += 1;
    }
    out
}

/// Convert between masks using the official Mercosul rule: the fifth
/// character maps digit 0-9 <-> letter A-J. Anything else is re-masked as is.
pub fn convert_plate(input: &str, to: PlateFormat) -> String {
    let mut chars: Vec<char> = normalized(input).chars().collect();
    if let Some(fifth) = chars.get_mut(4) {
        match to {
            PlateFormat::Mercosul if fifth.is_ascii_digit() => {
                let offset = fifth.to_digit(10).unwrap_or(0) as u8;
                *fifth = (b'A' + offset) as char;
            }
            PlateFormat::Old if matches!(*fifth, 'A'..='J') => {
                let offset = *fifth as u8 - b'A';
                *fifth = (b'0' + offset) as char;
            }
            _ => {}
        }
    }
    format_plate(&chars.into_iter().collect::<String>(), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_mask() {
        assert_eq!(format_plate("abc", PlateFormat::Old), "ABC");
        assert_eq!(format_plate("abc1", PlateFormat::Old), "ABC-1");
        assert_eq!(format_plate("abc1234", PlateFormat::Old), "ABC-1234");
        assert_eq!(format_plate("ABC-1234", PlateFormat::Old), "ABC-1234");
        assert_eq!(format_plate("abc12345", PlateFormat::Old), "ABC-1234");
    }

    #[test]
    fn test_mercosul_mask() {
        assert_eq!(format_plate("abc1d23", PlateFormat::Mercosul), "ABC1D23");
        assert_eq!(format_plate("ABC 1D2", PlateFormat::Mercosul), "ABC1D2");
        assert_eq!(format_plate("ABC1D23", PlateFormat::Mercosul), "ABC1D23");
    }

    #[test]
    fn test_drops_chars_that_do_not_fit() {
        assert_eq!(format_plate("1ab2c", PlateFormat::Old), "ABC");
        assert_eq!(format_plate("abc12", PlateFormat::Mercosul), "ABC1");
    }

    #[test]
    fn test_detect() {
        assert_eq!(PlateFormat::detect("ABC-1234"), PlateFormat::Old);
        assert_eq!(PlateFormat::detect("ABC1D23"), PlateFormat::Mercosul);
        assert_eq!(PlateFormat::detect(""), PlateFormat::Mercosul);
    }

    #[test]
    fn test_convert_between_masks() {
        assert_eq!(convert_plate("ABC-1234", PlateFormat::Mercosul), "ABC1C34");
        assert_eq!(convert_plate("ABC1C34", PlateFormat::Old), "ABC-1234");
    }
}
