// ==========================================
// 商品供应商导入 - 模块元数据与注册入口
// ==========================================
// 职责: 描述插件本身，并向导入子系统登记导入实体
// 入口: register_import_entities（导入子系统收集实体时调用）
// ==========================================

use crate::i18n::Translator;
use crate::importer::entity_type_trait::ImportEntityType;
use crate::importer::registry::ImportEntityRegistry;
use serde::Serialize;
use tracing::info;

/// 模块标识，同时作为导入实体键
pub const MODULE_NAME: &str = "importproductsupplier";

pub const MODULE_VERSION: &str = "1.0.0";

pub const MODULE_AUTHOR: &str = "datakick";

/// 宿主平台兼容范围
pub const MIN_PLATFORM_VERSION: &str = "1.6";
pub const MIN_THIRTYBEES_VERSION: &str = "1.5.0";

// ==========================================
// ModuleInfo - 模块信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub display_name: String,
    pub description: String,
    pub min_platform_version: &'static str,
    pub min_thirtybees_version: &'static str,
}

impl ModuleInfo {
    /// 按给定翻译器生成模块信息
    pub fn new(translator: &dyn Translator) -> Self {
        Self {
            name: MODULE_NAME,
            version: MODULE_VERSION,
            author: MODULE_AUTHOR,
            display_name: translator.translate("module.display_name"),
            description: translator.translate("module.description"),
            min_platform_version: MIN_PLATFORM_VERSION,
            min_thirtybees_version: MIN_THIRTYBEES_VERSION,
        }
    }
}

/// 向导入子系统登记商品供应商导入实体
///
/// # 参数
/// - registry: 导入实体注册表
/// - entity: 已装配好的导入实体
pub fn register_import_entities(
    registry: &mut ImportEntityRegistry,
    entity: Box<dyn ImportEntityType>,
) {
    info!(key = MODULE_NAME, entity = %entity.get_name(), "注册导入实体");
    registry.register(MODULE_NAME, entity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18nTranslator;

    #[test]
    fn test_module_info_translated() {
        let info = ModuleInfo::new(&I18nTranslator::new("en"));

        assert_eq!(info.name, "importproductsupplier");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.display_name, "Import Product Supplier");
        assert_eq!(
            info.description,
            "CSV Import: ability to import product suppliers"
        );
    }

    #[test]
    fn test_module_info_serializes() {
        let info = ModuleInfo::new(&I18nTranslator::new("en"));

        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["author"], "datakick");
        assert_eq!(json["min_thirtybees_version"], "1.5.0");
    }
}
