// ==========================================
// 商品供应商导入 - 导入层
// ==========================================
// 职责: 单行解析、定位、校验、落库
// 输入: 已解码的行（CSV 解析由宿主驱动完成）
// ==========================================

pub mod batch;
pub mod entity_type_trait;
pub mod error;
pub mod link_validator;
pub mod product_supplier_importer;
pub mod registry;
pub mod value_parser;

// 重导出核心类型
pub use batch::{run_batch, BatchOptions, BatchSummary};
pub use entity_type_trait::{AvailableField, ImportEntityType};
pub use error::ImportError;
pub use link_validator::{LinkValidator, ProductSupplierValidator, REFERENCE_MAX_LENGTH};
pub use product_supplier_importer::ProductSupplierImportEntityType;
pub use registry::ImportEntityRegistry;
