// ==========================================
// 商品供应商导入 - 核心库
// ==========================================
// 职责: CSV 导入子系统中的"商品供应商"导入实体
// 技术栈: Rust + SQLite
// 定位: 逐行解析 → 定位 → 校验 → 落库（CSV 解码由宿主驱动负责）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 单行导入
pub mod importer;

// 配置层 - 店铺配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 模块元数据与注册入口
pub mod module;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CombinationId, CurrencyId, LinkId, ProductId, SupplierId};

// 领域实体
pub use domain::{
    FieldViolation, ImportField, ImportResult, ImportRow, ProductSupplierLink, RowError,
    RowValue,
};

// 导入
pub use importer::{
    AvailableField, ImportEntityRegistry, ImportEntityType, ImportError,
    ProductSupplierImportEntityType,
};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use module::MODULE_NAME;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, module::MODULE_VERSION);
    }
}
