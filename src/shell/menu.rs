//! Menu selection and operator input parsing
//!
//! All functions are pure (no I/O) for easy testing.

use crate::io::record_format::parse_decimal;
use crate::types::{InventoryError, Quantity};
use rust_decimal::Decimal;

/// Answers accepted as "yes" by the clear confirmation, compared case-insensitively
pub const AFFIRMATIVE_TOKENS: [&str; 2] = ["S", "SIM"];

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Insert,
    List,
    Clear,
    Exit,
}

impl MenuOption {
    /// Every option, in menu order
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Insert,
        MenuOption::List,
        MenuOption::Clear,
        MenuOption::Exit,
    ];

    /// Parse a menu selection (`1` to `4`)
    ///
    /// Returns `None` for anything else.
    pub fn parse(selection: &str) -> Option<Self> {
        match selection.trim() {
            "1" => Some(MenuOption::Insert),
            "2" => Some(MenuOption::List),
            "3" => Some(MenuOption::Clear),
            "4" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    /// Key the operator types to pick this option
    pub fn key(self) -> char {
        match self {
            MenuOption::Insert => '1',
            MenuOption::List => '2',
            MenuOption::Clear => '3',
            MenuOption::Exit => '4',
        }
    }

    /// Text shown next to the key
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Insert => "Inserir Produto",
            MenuOption::List => "Listar Produtos",
            MenuOption::Clear => "Limpar Arquivo",
            MenuOption::Exit => "Sair",
        }
    }
}

/// Whether a confirmation answer is one of the affirmative tokens
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(answer))
}

/// Parse a quantity typed by the operator
///
/// # Returns
///
/// * `Ok(Quantity)` for a non-negative integer
/// * `Err(InventoryError::InvalidQuantity)` if the text is not an integer
/// * `Err(InventoryError::NegativeQuantity)` if the integer is below zero
pub fn parse_quantity(input: &str) -> Result<Quantity, InventoryError> {
    let quantity = input
        .trim()
        .parse::<Quantity>()
        .map_err(|_| InventoryError::invalid_quantity(input.trim()))?;

    if quantity < 0 {
        return Err(InventoryError::negative_quantity(quantity));
    }
    Ok(quantity)
}

/// Parse a unit price typed by the operator
///
/// Accepts `1.50` and, when there is no `.`, the comma form `1,50`.
///
/// # Returns
///
/// * `Ok(Decimal)` for a non-negative number
/// * `Err(InventoryError::InvalidPrice)` if the text is not a number
/// * `Err(InventoryError::NegativePrice)` if the number is below zero
pub fn parse_price(input: &str) -> Result<Decimal, InventoryError> {
    let trimmed = input.trim();
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };

    let price =
        parse_decimal(&normalized).ok_or_else(|| InventoryError::invalid_price(trimmed))?;

    if price < Decimal::ZERO {
        return Err(InventoryError::negative_price(price));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(MenuOption::Insert))]
    #[case("2", Some(MenuOption::List))]
    #[case("3", Some(MenuOption::Clear))]
    #[case("4", Some(MenuOption::Exit))]
    #[case(" 2 ", Some(MenuOption::List))]
    #[case("5", None)]
    #[case("0", None)]
    #[case("", None)]
    #[case("sair", None)]
    #[case("12", None)]
    fn test_menu_parse(#[case] selection: &str, #[case] expected: Option<MenuOption>) {
        assert_eq!(MenuOption::parse(selection), expected);
    }

    #[test]
    fn test_menu_keys_parse_back() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::parse(&option.key().to_string()), Some(option));
        }
    }

    #[rstest]
    #[case("S", true)]
    #[case("s", true)]
    #[case("SIM", true)]
    #[case("sim", true)]
    #[case("Sim\r", true)]
    #[case("N", false)]
    #[case("NAO", false)]
    #[case("Y", false)]
    #[case("YES", false)]
    #[case("", false)]
    #[case("SIMM", false)]
    fn test_is_affirmative(#[case] answer: &str, #[case] expected: bool) {
        assert_eq!(is_affirmative(answer), expected);
    }

    #[rstest]
    #[case("10", Ok(10))]
    #[case(" 0 ", Ok(0))]
    #[case("+7", Ok(7))]
    #[case("-1", Err(InventoryError::NegativeQuantity { quantity: -1 }))]
    #[case("dez", Err(InventoryError::InvalidQuantity { input: "dez".to_string() }))]
    #[case("1.5", Err(InventoryError::InvalidQuantity { input: "1.5".to_string() }))]
    #[case("", Err(InventoryError::InvalidQuantity { input: "".to_string() }))]
    #[case("99999999999", Err(InventoryError::InvalidQuantity { input: "99999999999".to_string() }))]
    fn test_parse_quantity(#[case] input: &str, #[case] expected: Result<Quantity, InventoryError>) {
        assert_eq!(parse_quantity(input), expected);
    }

    #[rstest]
    #[case("1.50", Ok(Decimal::new(150, 2)))]
    #[case("1,50", Ok(Decimal::new(150, 2)))]
    #[case(" 3 ", Ok(Decimal::new(3, 0)))]
    #[case("0", Ok(Decimal::ZERO))]
    #[case("-0.01", Err(InventoryError::NegativePrice { price: Decimal::new(-1, 2) }))]
    #[case("-0,01", Err(InventoryError::NegativePrice { price: Decimal::new(-1, 2) }))]
    #[case("abc", Err(InventoryError::InvalidPrice { input: "abc".to_string() }))]
    #[case("1,5,0", Err(InventoryError::InvalidPrice { input: "1,5,0".to_string() }))]
    #[case("", Err(InventoryError::InvalidPrice { input: "".to_string() }))]
    #[case("1e3", Err(InventoryError::InvalidPrice { input: "1e3".to_string() }))]
    #[case("2E-1", Err(InventoryError::InvalidPrice { input: "2E-1".to_string() }))]
    #[case("1_000", Err(InventoryError::InvalidPrice { input: "1_000".to_string() }))]
    fn test_parse_price(#[case] input: &str, #[case] expected: Result<Decimal, InventoryError>) {
        assert_eq!(parse_price(input), expected);
    }
}
