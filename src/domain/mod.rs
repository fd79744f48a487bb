// ==========================================
// 商品供应商导入 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、导入行与结果
// 红线: 不含数据访问逻辑
// ==========================================

pub mod import;
pub mod product_supplier;
pub mod types;

// 重导出核心类型
pub use import::{FieldViolation, ImportField, ImportResult, ImportRow, RowError, RowValue};
pub use product_supplier::ProductSupplierLink;
pub use types::{CombinationId, CurrencyId, LinkId, ProductId, SupplierId};
