//! Record format for the product store
//!
//! This module centralizes the line format of the store file, providing:
//! - Encoding a product to a `name,quantity,price` line
//! - Decoding a line (or an already split CSV record) back to a product
//!
//! The name is written verbatim: no quoting, no escaping. A name containing
//! the delimiter therefore does not survive a round trip.
//!
//! Decoding is lenient. Every failure is returned as a `RecordError` value
//! so that loading can skip the line and keep going.

use crate::types::{InventoryError, Product, Quantity, RecordError};
use csv::{QuoteStyle, StringRecord, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Field delimiter of the store file
pub const FIELD_DELIMITER: u8 = b',';

/// Number of fields in a well-formed record
pub const FIELD_COUNT: usize = 3;

/// Encode a product as a single store line (without terminator)
///
/// The price keeps its own scale and always uses `.` as decimal point:
/// `Caneta,10,1.50`.
pub fn encode(product: &Product) -> String {
    format!(
        "{}{}{}{}{}",
        product.name,
        FIELD_DELIMITER as char,
        product.quantity,
        FIELD_DELIMITER as char,
        product.unit_price
    )
}

/// Write a product as one store line followed by `\n`
///
/// # Arguments
///
/// * `product` - The product to write
/// * `output` - Writer positioned where the line should go
///
/// # Returns
///
/// * `Ok(())` if the line was written and flushed
/// * `Err(InventoryError::Io)` if writing failed
pub fn write_record(product: &Product, output: &mut dyn Write) -> Result<(), InventoryError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(FIELD_DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    writer.write_record([
        product.name.clone(),
        product.quantity.to_string(),
        product.unit_price.to_string(),
    ])?;
    writer.flush()?;

    Ok(())
}

/// Decode one store line
///
/// # Returns
///
/// * `Ok(Product)` - Line had three fields with a valid quantity and price
/// * `Err(RecordError)` - Line is blank or malformed and should be skipped
pub fn decode(line: &str) -> Result<Product, RecordError> {
    if line.trim().is_empty() {
        return Err(RecordError::Blank);
    }

    let record: StringRecord = line
        .split(FIELD_DELIMITER as char)
        .map(str::trim)
        .collect();

    convert_record(&record)
}

/// Convert an already split record to a product
///
/// Same rules as `decode`: exactly three fields, quantity parses as an
/// integer, price parses as a decimal with `.` as separator. The name is
/// trimmed but may be empty, and negative numbers are accepted as stored.
pub fn convert_record(record: &StringRecord) -> Result<Product, RecordError> {
    if record.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount {
            found: record.len(),
        });
    }

    let name = &record[0];
    let quantity_field = &record[1];
    let price_field = &record[2];

    let quantity = quantity_field
        .trim()
        .parse::<Quantity>()
        .map_err(|_| RecordError::Quantity {
            value: quantity_field.to_string(),
        })?;

    let unit_price = parse_decimal(price_field).ok_or_else(|| RecordError::Price {
        value: price_field.to_string(),
    })?;

    Ok(Product::new(name.trim(), quantity, unit_price))
}

/// Parse a plain decimal number: optional sign, digits, at most one `.`
///
/// Surrounding whitespace is ignored. Exponents (`1e3`), digit separators
/// (`1_000`) and grouping commas are refused.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let unsigned = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);

    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }

    Decimal::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case::two_places(Product::new("Caneta", 10, dec("1.50")), "Caneta,10,1.50")]
    #[case::whole_price(Product::new("Caderno", 2, dec("12")), "Caderno,2,12")]
    #[case::small_price(Product::new("Clipe", 1000, dec("0.001")), "Clipe,1000,0.001")]
    #[case::name_with_spaces(Product::new("Papel A4", 0, dec("25.9")), "Papel A4,0,25.9")]
    #[case::delimiter_not_escaped(Product::new("Cola, bastão", 1, dec("3")), "Cola, bastão,1,3")]
    fn test_encode(#[case] product: Product, #[case] expected: &str) {
        assert_eq!(encode(&product), expected);
    }

    #[test]
    fn test_write_record_appends_newline_without_quoting() {
        let mut output = Vec::new();
        write_record(&Product::new("Cola \"extra\"", 1, dec("3.5")), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Cola \"extra\",1,3.5\n");
    }

    #[rstest]
    #[case::plain("Caneta,10,1.50", Product::new("Caneta", 10, dec("1.50")))]
    #[case::padded("  Caneta , 10 , 1.50  ", Product::new("Caneta", 10, dec("1.50")))]
    #[case::empty_name(",3,2.00", Product::new("", 3, dec("2.00")))]
    #[case::negative_quantity("Lápis,-4,1", Product::new("Lápis", -4, dec("1")))]
    #[case::negative_price("Lápis,4,-1.25", Product::new("Lápis", 4, dec("-1.25")))]
    #[case::explicit_sign("Lápis,+4,+1.25", Product::new("Lápis", 4, dec("1.25")))]
    fn test_decode_valid(#[case] line: &str, #[case] expected: Product) {
        assert_eq!(decode(line), Ok(expected));
    }

    #[rstest]
    #[case::empty("", RecordError::Blank)]
    #[case::whitespace("   \t", RecordError::Blank)]
    #[case::two_fields("Caneta,10", RecordError::FieldCount { found: 2 })]
    #[case::four_fields("Cola, bastão,1,3", RecordError::FieldCount { found: 4 })]
    #[case::bad_quantity("Caneta,dez,1.50", RecordError::Quantity { value: "dez".to_string() })]
    #[case::fractional_quantity("Caneta,1.5,1.50", RecordError::Quantity { value: "1.5".to_string() })]
    #[case::bad_price("Caneta,10,abc", RecordError::Price { value: "abc".to_string() })]
    #[case::empty_price("Caneta,10,", RecordError::Price { value: "".to_string() })]
    #[case::exponent_price("A,1,1e3", RecordError::Price { value: "1e3".to_string() })]
    #[case::upper_exponent_price("A,1,2E-1", RecordError::Price { value: "2E-1".to_string() })]
    #[case::underscore_price("A,1,1_000", RecordError::Price { value: "1_000".to_string() })]
    #[case::two_points_price("A,1,1.2.3", RecordError::Price { value: "1.2.3".to_string() })]
    #[case::sign_only_price("A,1,-", RecordError::Price { value: "-".to_string() })]
    fn test_decode_invalid(#[case] line: &str, #[case] expected: RecordError) {
        assert_eq!(decode(line), Err(expected));
    }

    #[rstest]
    #[case::typical(Product::new("Caneta", 10, dec("1.50")))]
    #[case::zeroes(Product::new("Borracha", 0, Decimal::ZERO))]
    #[case::large(Product::new("Resma", i32::MAX, dec("99999999.9999")))]
    fn test_round_trip(#[case] product: Product) {
        assert_eq!(decode(&encode(&product)), Ok(product));
    }

    #[rstest]
    #[case::plain("1.50", Some(Decimal::new(150, 2)))]
    #[case::padded("  7 ", Some(Decimal::new(7, 0)))]
    #[case::negative("-0.01", Some(Decimal::new(-1, 2)))]
    #[case::plus_sign("+2.5", Some(Decimal::new(25, 1)))]
    #[case::exponent("1e3", None)]
    #[case::underscore("1_000", None)]
    #[case::comma("1,50", None)]
    #[case::double_sign("--1", None)]
    #[case::point_only(".", None)]
    #[case::empty("", None)]
    fn test_parse_decimal(#[case] text: &str, #[case] expected: Option<Decimal>) {
        assert_eq!(parse_decimal(text), expected);
    }

    #[test]
    fn test_convert_record_matches_decode() {
        let record = StringRecord::from(vec!["Caneta", "10", "1.50"]);
        assert_eq!(convert_record(&record), decode("Caneta,10,1.50"));
    }
}
