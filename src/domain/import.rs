// ==========================================
// 商品供应商导入 - 导入行与导入结果
// ==========================================
// 职责: 单行输入（已由驱动解码）与单行处理结果
// 说明: 均为瞬态对象，不落库
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// ImportField - 可识别的输入字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportField {
    Ignore,             // no: 忽略该列
    SupplierId,         // id_supplier
    ProductId,          // id_product
    CombinationId,      // id_product_attribute
    SupplierReference,  // reference
    Price,              // price
    Currency,           // currency
}

impl ImportField {
    /// 按列映射界面的展示顺序
    pub const ALL: [ImportField; 7] = [
        ImportField::Ignore,
        ImportField::SupplierId,
        ImportField::ProductId,
        ImportField::CombinationId,
        ImportField::SupplierReference,
        ImportField::Price,
        ImportField::Currency,
    ];

    /// 字段键（行数据中的列名）
    pub fn key(self) -> &'static str {
        match self {
            ImportField::Ignore => "no",
            ImportField::SupplierId => "id_supplier",
            ImportField::ProductId => "id_product",
            ImportField::CombinationId => "id_product_attribute",
            ImportField::SupplierReference => "reference",
            ImportField::Price => "price",
            ImportField::Currency => "currency",
        }
    }
}

impl fmt::Display for ImportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ==========================================
// RowValue - 单元格值
// ==========================================
// 驱动通常传入字符串；JSON 数字按整数/浮点保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        RowValue::Text(value.to_string())
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        RowValue::Text(value)
    }
}

impl From<i64> for RowValue {
    fn from(value: i64) -> Self {
        RowValue::Int(value)
    }
}

// ==========================================
// ImportRow - 单行输入
// ==========================================
// null 值视为该列缺失
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Option<RowValue>>")]
pub struct ImportRow {
    values: HashMap<String, RowValue>,
}

impl From<HashMap<String, Option<RowValue>>> for ImportRow {
    fn from(raw: HashMap<String, Option<RowValue>>) -> Self {
        Self {
            values: raw
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        }
    }
}

impl ImportRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置字段值
    pub fn with(mut self, field: ImportField, value: impl Into<RowValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: ImportField, value: impl Into<RowValue>) {
        self.values.insert(field.key().to_string(), value.into());
    }

    pub fn get(&self, field: ImportField) -> Option<&RowValue> {
        self.values.get(field.key())
    }
}

// ==========================================
// FieldViolation - 字段级校验失败
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,   // 实体字段名（如 product_supplier_reference）
    pub message: String, // 已翻译的错误信息
}

// ==========================================
// RowError - 单行错误
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowError {
    Message(String),
    Validation(Vec<FieldViolation>),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::Message(msg) => f.write_str(msg),
            RowError::Validation(violations) => {
                let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
                f.write_str(&messages.join("; "))
            }
        }
    }
}

// ==========================================
// ImportResult - 单行处理结果
// ==========================================
// errors: 实体已解析但校验失败（阻断落库）
// warnings: 实体无法解析（该行跳过）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    pub errors: Vec<RowError>,
    pub warnings: Vec<String>,
}

impl ImportResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_json() {
        let row: ImportRow =
            serde_json::from_str(r#"{"id_product": "12", "currency": 3, "reference": "SUP-001"}"#)
                .unwrap();

        assert_eq!(row.get(ImportField::ProductId), Some(&RowValue::from("12")));
        assert_eq!(row.get(ImportField::Currency), Some(&RowValue::Int(3)));
        assert_eq!(row.get(ImportField::Price), None);
    }

    #[test]
    fn test_row_accepts_floats_and_nulls() {
        let row: ImportRow =
            serde_json::from_str(r#"{"id_product": 12, "price": 19.9, "reference": null}"#)
                .unwrap();

        assert_eq!(row.get(ImportField::ProductId), Some(&RowValue::Int(12)));
        assert_eq!(row.get(ImportField::Price), Some(&RowValue::Float(19.9)));
        assert_eq!(row.get(ImportField::SupplierReference), None);
    }

    #[test]
    fn test_result_serializes_structured_errors() {
        let result = ImportResult {
            errors: vec![RowError::Validation(vec![FieldViolation {
                field: "id_currency".to_string(),
                message: "invalid".to_string(),
            }])],
            warnings: vec!["Failed to resolve supplier".to_string()],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["errors"][0][0]["field"], "id_currency");
        assert_eq!(json["warnings"][0], "Failed to resolve supplier");
    }
}
