// ==========================================
// 商品供应商导入 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、写入
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::domain::types::CurrencyId;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {

    /// 从已有连接创建 ConfigManager
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 写入 global scope 配置值（存在则覆盖）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO config_kv (scope_id, key, value, updated_at)
            VALUES ('global', ?1, ?2, datetime('now'))
            ON CONFLICT(scope_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;

        Ok(())
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> RepositoryResult<String> {
        Ok(self
            .get_global_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

}

impl ImportConfigReader for ConfigManager {
    fn get_default_currency_id(&self) -> RepositoryResult<CurrencyId> {
        let value = self.get_config_or_default(config_keys::DEFAULT_CURRENCY, "1")?;

        value
            .trim()
            .parse::<i64>()
            .map(CurrencyId)
            .map_err(|e| RepositoryError::FieldValueError {
                field: config_keys::DEFAULT_CURRENCY.to_string(),
                message: format!("无法解析为币种 ID: {} ({})", value, e),
            })
    }

    fn get_locale(&self) -> RepositoryResult<String> {
        let value = self.get_config_or_default(config_keys::IMPORT_LOCALE, "en")?;
        let value = value.trim();

        if value.is_empty() {
            Ok("en".to_string())
        } else {
            Ok(value.to_string())
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 店铺默认币种
    pub const DEFAULT_CURRENCY: &str = "PS_CURRENCY_DEFAULT";

    // 导入提示语言
    pub const IMPORT_LOCALE: &str = "import_locale";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn setup_manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_defaults_when_missing() {
        let manager = setup_manager();

        assert_eq!(manager.get_default_currency_id().unwrap(), CurrencyId(1));
        assert_eq!(manager.get_locale().unwrap(), "en");
    }

    #[test]
    fn test_set_and_read() {
        let manager = setup_manager();

        manager
            .set_global_config_value(config_keys::DEFAULT_CURRENCY, "3")
            .unwrap();
        manager
            .set_global_config_value(config_keys::IMPORT_LOCALE, "zh-CN")
            .unwrap();
        manager
            .set_global_config_value(config_keys::DEFAULT_CURRENCY, "2")
            .unwrap();

        assert_eq!(manager.get_default_currency_id().unwrap(), CurrencyId(2));
        assert_eq!(manager.get_locale().unwrap(), "zh-CN");
    }

    #[test]
    fn test_invalid_currency_value() {
        let manager = setup_manager();
        manager
            .set_global_config_value(config_keys::DEFAULT_CURRENCY, "euro")
            .unwrap();

        let err = manager.get_default_currency_id().unwrap_err();
        assert!(matches!(err, RepositoryError::FieldValueError { .. }));
    }
}
