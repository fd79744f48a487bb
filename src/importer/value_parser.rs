// ==========================================
// 商品供应商导入 - 单元格值解析
// ==========================================
// 职责: 整数转换 / 真值判断 / 区域感知的数字解析 / 文本清洗
// 说明: 解析失败不报错，按宿主平台的转换规则回落为 0
// ==========================================

use crate::domain::import::RowValue;

/// 按整数解析（跳过前导空白，可带符号，只取前导数字；无数字 → 0，溢出饱和）
///
/// `"12abc"` → 12，`"abc"` → 0，`" -5"` → -5
pub fn parse_int(value: &RowValue) -> i64 {
    match value {
        RowValue::Int(v) => *v,
        RowValue::Float(v) => *v as i64,
        RowValue::Text(s) => parse_leading_int(s),
    }
}

fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative {
        -acc
    } else {
        acc
    }
}

/// 真值判断：空串与 "0" 为假，整数 0 为假
pub fn is_truthy(value: &RowValue) -> bool {
    match value {
        RowValue::Int(v) => *v != 0,
        RowValue::Float(v) => *v != 0.0,
        RowValue::Text(s) => !s.is_empty() && s != "0",
    }
}

/// 区域感知的数字解析
///
/// - 丢弃空白（含不换行空格）与货币符号等非数字字符
/// - 同时出现 `.` 与 `,` 时，靠后者为小数点，另一个为千分位
/// - 仅出现一次 `,` 视为小数点；同一分隔符出现多次视为千分位
/// - 无法解析 → 0
pub fn parse_number(value: &RowValue) -> f64 {
    let text = match value {
        RowValue::Int(v) => return *v as f64,
        RowValue::Float(v) => return *v,
        RowValue::Text(s) => s,
    };

    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let negative = kept.starts_with('-');
    let body: String = kept.chars().filter(|c| *c != '-').collect();

    let normalized = match (body.rfind('.'), body.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => body.replace(',', ""),
        (Some(_), Some(_)) => body.replace('.', "").replace(',', "."),
        (None, Some(_)) if body.matches(',').count() == 1 => body.replace(',', "."),
        (None, Some(_)) => body.replace(',', ""),
        (Some(_), None) if body.matches('.').count() > 1 => body.replace('.', ""),
        _ => body,
    };

    let number = normalized.parse::<f64>().unwrap_or(0.0);
    if negative {
        -number
    } else {
        number
    }
}

/// 文本值（整数转为十进制字符串）
pub fn text_of(value: &RowValue) -> String {
    match value {
        RowValue::Int(v) => v.to_string(),
        RowValue::Float(v) => v.to_string(),
        RowValue::Text(s) => s.clone(),
    }
}

/// TRIM 后的文本，空串 → None
pub fn trimmed_text(value: &RowValue) -> Option<String> {
    let text = text_of(value);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RowValue {
        RowValue::from(s)
    }

    #[test]
    fn test_parse_int_leading_digits() {
        assert_eq!(parse_int(&text("12")), 12);
        assert_eq!(parse_int(&text("12abc")), 12);
        assert_eq!(parse_int(&text("  7")), 7);
        assert_eq!(parse_int(&text("-5")), -5);
        assert_eq!(parse_int(&text("12.9")), 12);
        assert_eq!(parse_int(&text("abc")), 0);
        assert_eq!(parse_int(&text("")), 0);
        assert_eq!(parse_int(&RowValue::Int(42)), 42);
        assert_eq!(parse_int(&RowValue::Float(12.7)), 12);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int(&text("99999999999999999999999")), i64::MAX);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&text("12")));
        assert!(is_truthy(&text("abc")));
        assert!(is_truthy(&text("00")));
        assert!(!is_truthy(&text("0")));
        assert!(!is_truthy(&text("")));
        assert!(!is_truthy(&RowValue::Int(0)));
        assert!(is_truthy(&RowValue::Int(3)));
        assert!(!is_truthy(&RowValue::Float(0.0)));
    }

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number(&text("19.90")), 19.90);
        assert_eq!(parse_number(&text("19,90")), 19.90);
        assert_eq!(parse_number(&text("-5,5")), -5.5);
        assert_eq!(parse_number(&RowValue::Int(7)), 7.0);
        assert_eq!(parse_number(&RowValue::Float(19.9)), 19.9);
    }

    #[test]
    fn test_parse_number_thousands() {
        assert_eq!(parse_number(&text("1.234.567,89")), 1_234_567.89);
        assert_eq!(parse_number(&text("1,234.5")), 1234.5);
        assert_eq!(parse_number(&text("1,234,567")), 1_234_567.0);
        assert_eq!(parse_number(&text("1.234.567")), 1_234_567.0);
    }

    #[test]
    fn test_parse_number_noise() {
        assert_eq!(parse_number(&text("€ 19,90")), 19.90);
        assert_eq!(parse_number(&text("1\u{a0}200,50 Kč")), 1200.50);
        assert_eq!(parse_number(&text("abc")), 0.0);
        assert_eq!(parse_number(&text("")), 0.0);
    }

    #[test]
    fn test_trimmed_text() {
        assert_eq!(trimmed_text(&text("  SUP-001 ")), Some("SUP-001".to_string()));
        assert_eq!(trimmed_text(&text("   ")), None);
        assert_eq!(trimmed_text(&RowValue::Int(15)), Some("15".to_string()));
    }
}
