//! Форматирование цен и фасовки для карточек SKU

/// Текст для SKU без цены. Отсутствие цены не равно нулю.
pub const NO_PRICE_TEXT: &str = "No DLP set for this SKU";

/// Заглушка для отсутствующих необязательных полей
pub const MISSING_VALUE: &str = "—";

/// Число в индийской системе группировки разрядов с `decimals` знаками
///
/// Последние три цифры целой части, дальше группы по две.
///
/// ```
/// use frontend::shared::number_format::format_indian;
/// assert_eq!(format_indian(1234567.891, 2), "12,34,567.89");
/// assert_eq!(format_indian(999.0, 2), "999.00");
/// ```
pub fn format_indian(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = round_half_up(&format!("{}", value.abs()), decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // -0.00 после округления остаётся без знака
    let is_negative = value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut result = String::new();
    if is_negative {
        result.push('-');
    }
    result.push_str(&group_indian(integer_part));
    if let Some(d) = decimal_part {
        result.push('.');
        result.push_str(d);
    }
    result
}

/// Округление десятичной записи до `decimals` знаков, половина вверх
///
/// Работает с кратчайшей записью числа, а не с двоичным значением:
/// 2.675 даёт 2.68, как в браузерном `toLocaleString`.
fn round_half_up(text: &str, decimals: usize) -> String {
    let (integer_part, fraction) = text.split_once('.').unwrap_or((text, ""));

    let mut digits: Vec<u8> = integer_part
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(decimals).is_some_and(|b| *b >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut result: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    if decimals > 0 {
        result.push('.');
        result.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    result
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Цена за упаковку: "₹1,234.50 per pack" или [`NO_PRICE_TEXT`]
pub fn format_price_per_pack(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{} per pack", format_indian(v, 2)),
        None => NO_PRICE_TEXT.to_string(),
    }
}

/// Объём упаковки: "1 L", "0.5 L" или "—"
pub fn format_pack_size(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} L", v),
        None => MISSING_VALUE.to_string(),
    }
}

pub fn format_packs_per_case(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

pub fn text_or_missing(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(MISSING_VALUE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indian() {
        assert_eq!(format_indian(0.0, 2), "0.00");
        assert_eq!(format_indian(42.0, 2), "42.00");
        assert_eq!(format_indian(1234.5, 2), "1,234.50");
        assert_eq!(format_indian(12345.0, 2), "12,345.00");
        assert_eq!(format_indian(123456.0, 2), "1,23,456.00");
        assert_eq!(format_indian(1234567.891, 2), "12,34,567.89");
        assert_eq!(format_indian(123456789.0, 0), "12,34,56,789");
        assert_eq!(format_indian(-98765.4, 2), "-98,765.40");
        assert_eq!(format_indian(-0.001, 2), "0.00");
    }

    #[test]
    fn test_price_per_pack() {
        assert_eq!(format_price_per_pack(Some(1234.5)), "₹1,234.50 per pack");
        assert_eq!(format_price_per_pack(Some(0.0)), "₹0.00 per pack");
        assert_eq!(format_price_per_pack(Some(349.999)), "₹350.00 per pack");
    }

    #[test]
    fn test_price_half_cent_rounds_up() {
        assert_eq!(format_price_per_pack(Some(2.675)), "₹2.68 per pack");
        assert_eq!(format_price_per_pack(Some(1234.125)), "₹1,234.13 per pack");
        assert_eq!(format_price_per_pack(Some(0.125)), "₹0.13 per pack");
        assert_eq!(format_price_per_pack(Some(99999.995)), "₹1,00,000.00 per pack");
        assert_eq!(format_price_per_pack(Some(1.004)), "₹1.00 per pack");
        assert_eq!(format_indian(-2.675, 2), "-2.68");
        assert_eq!(format_indian(9.5, 0), "10");
    }

    #[test]
    fn test_missing_price_is_placeholder_not_zero() {
        let text = format_price_per_pack(None);
        assert_eq!(text, NO_PRICE_TEXT);
        assert!(!text.contains("0.00"));
    }

    #[test]
    fn test_pack_fields() {
        assert_eq!(format_pack_size(Some(1.0)), "1 L");
        assert_eq!(format_pack_size(Some(0.9)), "0.9 L");
        assert_eq!(format_pack_size(None), "—");
        assert_eq!(format_packs_per_case(Some(12)), "12");
        assert_eq!(format_packs_per_case(None), "—");
        assert_eq!(text_or_missing(Some("10W30")), "10W30");
        assert_eq!(text_or_missing(Some("  ")), "—");
        assert_eq!(text_or_missing(None), "—");
    }
}
