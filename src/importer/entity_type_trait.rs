// ==========================================
// 商品供应商导入 - 导入实体类型 Trait
// ==========================================
// 职责: 定义导入驱动可见的接口（不包含实现）
// 调用方: 通用导入驱动（逐行、串行调用 import）
// ==========================================

use crate::domain::import::{ImportResult, ImportRow};
use crate::importer::error::ImportError;
use serde::Serialize;

// ==========================================
// AvailableField - 字段目录条目
// ==========================================
// 用途: 列映射界面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableField {
    pub key: &'static str,
    pub label: String,
}

// ==========================================
// ImportEntityType Trait
// ==========================================
// 实现者: ProductSupplierImportEntityType
pub trait ImportEntityType: Send + Sync {
    /// 实体类型名称（已翻译）
    fn get_name(&self) -> String;

    /// 可识别的输入字段及标签（有序）
    fn get_available_fields(&self) -> Vec<AvailableField>;

    /// 是否支持导入前清空
    fn support_truncate(&self) -> bool;

    /// 清空目标表
    ///
    /// # 返回
    /// - Ok(()): 清空成功
    /// - Err(messages): 失败信息（不向上抛出）
    fn truncate(&self) -> Result<(), Vec<String>>;

    /// 处理单行数据
    ///
    /// # 参数
    /// - row: 已解码的行
    /// - validate_only: true 时只解析与校验，不落库
    ///
    /// # 返回
    /// - Ok(ImportResult): 行级 errors / warnings
    /// - Err: 数据访问等基础设施故障
    fn import(&self, row: &ImportRow, validate_only: bool) -> Result<ImportResult, ImportError>;
}
