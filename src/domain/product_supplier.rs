// ==========================================
// 商品供应商导入 - 商品供应商关联实体
// ==========================================
// 对齐: product_supplier 表
// 约束: (product_id, combination_id, supplier_id) 三元组唯一
// ==========================================

use crate::domain::types::{CombinationId, CurrencyId, LinkId, ProductId, SupplierId};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductSupplierLink - 商品供应商关联
// ==========================================
// 用途: 纯数据结构，读写由 ProductSupplierRepository 负责
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSupplierLink {
    pub id: Option<LinkId>,                    // None = 尚未落库
    pub product_id: ProductId,                 // 商品
    pub combination_id: Option<CombinationId>, // None = 基础商品（无组合）
    pub supplier_id: SupplierId,               // 供应商
    pub currency_id: CurrencyId,               // 币种
    pub price_tax_excluded: f64,               // 供应商价格（不含税）
    pub supplier_reference: Option<String>,    // 供应商参考号
}

impl ProductSupplierLink {
    /// 创建尚未落库的关联（价格 0，无参考号）
    pub fn new(
        product_id: ProductId,
        combination_id: Option<CombinationId>,
        supplier_id: SupplierId,
        currency_id: CurrencyId,
    ) -> Self {
        Self {
            id: None,
            product_id,
            combination_id,
            supplier_id,
            currency_id,
            price_tax_excluded: 0.0,
            supplier_reference: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_link_defaults() {
        let link = ProductSupplierLink::new(ProductId(12), None, SupplierId(4), CurrencyId(1));

        assert!(link.is_new());
        assert_eq!(link.price_tax_excluded, 0.0);
        assert_eq!(link.supplier_reference, None);
    }
}
