// ==========================================
// 商品供应商导入 - 导入实体注册表
// ==========================================
// 职责: 按实体键登记导入实体，供通用导入驱动查找
// 说明: 注册顺序即展示顺序
// ==========================================

use crate::importer::entity_type_trait::ImportEntityType;
use crate::importer::error::ImportError;
use tracing::{debug, warn};

#[derive(Default)]
pub struct ImportEntityRegistry {
    entries: Vec<(String, Box<dyn ImportEntityType>)>,
}

impl ImportEntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记导入实体（同键覆盖）
    pub fn register(&mut self, key: impl Into<String>, entity: Box<dyn ImportEntityType>) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            warn!(key = %key, "导入实体重复注册，覆盖旧实体");
            slot.1 = entity;
            return;
        }
        debug!(key = %key, "导入实体已注册");
        self.entries.push((key, entity));
    }

    pub fn get(&self, key: &str) -> Option<&dyn ImportEntityType> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entity)| entity.as_ref())
    }

    /// 查找实体，未注册时返回错误
    pub fn require(&self, key: &str) -> Result<&dyn ImportEntityType, ImportError> {
        self.get(key)
            .ok_or_else(|| ImportError::EntityNotRegistered(key.to_string()))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}
