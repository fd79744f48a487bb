// ==========================================
// 商品供应商导入 - 领域类型定义
// ==========================================
// 职责: 标识符类型（显式区分"未解析"与"无组合"）
// 约定: 数据库中 0 表示缺失，进入领域层后统一转换为 Option
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// 将数据库/外部输入中的整数转换为标识符（0 视为缺失）
            pub fn from_raw(raw: i64) -> Option<Self> {
                if raw == 0 {
                    None
                } else {
                    Some(Self(raw))
                }
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// 商品 ID（product.id_product）
    ProductId
);

id_type!(
    /// 商品组合 ID（product_attribute.id_product_attribute）
    CombinationId
);

id_type!(
    /// 供应商 ID（supplier.id_supplier）
    SupplierId
);

id_type!(
    /// 币种 ID（currency.id_currency）
    CurrencyId
);

id_type!(
    /// 商品供应商关联 ID（product_supplier.id_product_supplier）
    LinkId
);

/// 组合 ID 落库值（None → 0，表示基础商品）
pub fn combination_to_raw(combination: Option<CombinationId>) -> i64 {
    combination.map(CombinationId::get).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_missing() {
        assert_eq!(ProductId::from_raw(0), None);
        assert_eq!(ProductId::from_raw(12), Some(ProductId(12)));
        assert_eq!(CombinationId::from_raw(-3), Some(CombinationId(-3)));
    }

    #[test]
    fn test_combination_to_raw() {
        assert_eq!(combination_to_raw(None), 0);
        assert_eq!(combination_to_raw(Some(CombinationId(7))), 7);
    }
}
