//! Deterministic input masks used by the workshop forms

mod cpf;
mod money;
mod phone;
mod plate;

pub use cpf::{format_cpf, is_valid_cpf, CPF_DIGITS};
pub use money::{currency_input, format_brl, parse_brl};
pub use phone::format_phone;
pub use plate::{convert_plate, format_plate, PlateFormat};

/// Keep only ASCII digits
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
