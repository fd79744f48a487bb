// ==========================================
// 商品供应商导入 - 币种查询仓储
// ==========================================
// 职责: 按 ISO 代码解析币种 ID（仅未删除的币种）
// ==========================================

use crate::domain::types::CurrencyId;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// CurrencyRepository Trait
// ==========================================
pub trait CurrencyRepository: Send + Sync {
    /// 按 ISO 代码查找币种（忽略首尾空白与大小写）
    fn find_id_by_iso_code(&self, iso_code: &str) -> RepositoryResult<Option<CurrencyId>>;
}

// ==========================================
// CurrencyRepositoryImpl
// ==========================================
pub struct CurrencyRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl CurrencyRepositoryImpl {

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl CurrencyRepository for CurrencyRepositoryImpl {
    fn find_id_by_iso_code(&self, iso_code: &str) -> RepositoryResult<Option<CurrencyId>> {
        let iso_code = iso_code.trim();
        if iso_code.is_empty() {
            return Ok(None);
        }

        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let id = conn
            .query_row(
                r#"
                SELECT id_currency FROM currency
                WHERE deleted = 0 AND iso_code = ?1 COLLATE NOCASE
                ORDER BY id_currency
                LIMIT 1
                "#,
                params![iso_code],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        Ok(id.map(CurrencyId))
    }
}
