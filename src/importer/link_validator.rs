// ==========================================
// 商品供应商导入 - 关联实体字段校验
// ==========================================
// 职责: 按 product_supplier 表定义校验字段值
// 规则:
// - id_product / id_supplier: 必填，无符号 ID（> 0）
// - id_product_attribute / id_currency: 无符号 ID（可为 0）
// - product_supplier_reference: 不含 <>;={}，最长 64 字符
// - product_supplier_price_te: 价格（有限、非负、< 10^10）
// ==========================================

use crate::domain::import::FieldViolation;
use crate::domain::product_supplier::ProductSupplierLink;
use crate::domain::types::combination_to_raw;
use crate::i18n::Translator;
use std::sync::Arc;

/// 供应商参考号最大长度
pub const REFERENCE_MAX_LENGTH: usize = 64;

const UNSIGNED_ID_MAX: i64 = u32::MAX as i64;
const PRICE_LIMIT: f64 = 1e10;

// ==========================================
// LinkValidator Trait
// ==========================================
pub trait LinkValidator: Send + Sync {
    /// 字段级校验
    fn validate_fields(&self, link: &ProductSupplierLink) -> Result<(), Vec<FieldViolation>>;

    /// 多语言字段校验
    fn validate_fields_lang(&self, link: &ProductSupplierLink) -> Result<(), Vec<FieldViolation>>;
}

// ==========================================
// ProductSupplierValidator
// ==========================================
pub struct ProductSupplierValidator {
    translator: Arc<dyn Translator>,
}

impl ProductSupplierValidator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    fn violation(&self, field: &str, key: &str, extra: &[(&str, &str)]) -> FieldViolation {
        let mut args = vec![("field", field)];
        args.extend_from_slice(extra);
        FieldViolation {
            field: field.to_string(),
            message: self.translator.translate_with_args(key, &args),
        }
    }

    fn check_required_id(&self, field: &str, value: i64, violations: &mut Vec<FieldViolation>) {
        if value == 0 {
            violations.push(self.violation(field, "validation.required", &[]));
        } else {
            self.check_unsigned_id(field, value, violations);
        }
    }

    fn check_unsigned_id(&self, field: &str, value: i64, violations: &mut Vec<FieldViolation>) {
        if !(0..=UNSIGNED_ID_MAX).contains(&value) {
            violations.push(self.violation(field, "validation.invalid", &[]));
        }
    }
}

impl LinkValidator for ProductSupplierValidator {
    fn validate_fields(&self, link: &ProductSupplierLink) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        self.check_required_id("id_product", link.product_id.get(), &mut violations);
        self.check_unsigned_id(
            "id_product_attribute",
            combination_to_raw(link.combination_id),
            &mut violations,
        );
        self.check_required_id("id_supplier", link.supplier_id.get(), &mut violations);
        self.check_unsigned_id("id_currency", link.currency_id.get(), &mut violations);

        if let Some(reference) = &link.supplier_reference {
            let field = "product_supplier_reference";
            if reference.chars().any(|c| matches!(c, '<' | '>' | ';' | '=' | '{' | '}')) {
                violations.push(self.violation(field, "validation.invalid", &[]));
            } else if reference.chars().count() > REFERENCE_MAX_LENGTH {
                let max = REFERENCE_MAX_LENGTH.to_string();
                violations.push(self.violation(field, "validation.too_long", &[("max", max.as_str())]));
            }
        }

        let price = link.price_tax_excluded;
        if !price.is_finite() || price < 0.0 || price >= PRICE_LIMIT {
            violations.push(self.violation("product_supplier_price_te", "validation.invalid", &[]));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    // 该实体没有多语言字段
    fn validate_fields_lang(&self, _link: &ProductSupplierLink) -> Result<(), Vec<FieldViolation>> {
        Ok(())
    }
}
