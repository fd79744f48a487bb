// ==========================================
// 商品供应商导入 - 目录查询仓储
// ==========================================
// 职责: 商品/供应商存在性校验
// 红线: 只读，不含业务逻辑
// ==========================================

use crate::domain::types::{ProductId, SupplierId};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// CatalogRepository Trait
// ==========================================
pub trait CatalogRepository: Send + Sync {
    /// 商品是否存在
    fn product_exists(&self, id: ProductId) -> RepositoryResult<bool>;

    /// 供应商是否存在
    fn supplier_exists(&self, id: SupplierId) -> RepositoryResult<bool>;
}

// ==========================================
// CatalogRepositoryImpl
// ==========================================
pub struct CatalogRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogRepositoryImpl {

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn exists(&self, sql: &str, id: i64) -> RepositoryResult<bool> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let found = conn
            .query_row(sql, params![id], |_row| Ok(()))
            .optional()?;

        Ok(found.is_some())
    }
}

impl CatalogRepository for CatalogRepositoryImpl {
    fn product_exists(&self, id: ProductId) -> RepositoryResult<bool> {
        self.exists(
            "SELECT 1 FROM product WHERE id_product = ?1 LIMIT 1",
            id.get(),
        )
    }

    fn supplier_exists(&self, id: SupplierId) -> RepositoryResult<bool> {
        self.exists(
            "SELECT 1 FROM supplier WHERE id_supplier = ?1 LIMIT 1",
            id.get(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    #[test]
    fn test_exists() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute("INSERT INTO product (id_product) VALUES (12)", [])
            .unwrap();
        conn.execute("INSERT INTO supplier (id_supplier, name) VALUES (4, 'ACME')", [])
            .unwrap();

        let repo = CatalogRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)));

        assert!(repo.product_exists(ProductId(12)).unwrap());
        assert!(!repo.product_exists(ProductId(13)).unwrap());
        assert!(repo.supplier_exists(SupplierId(4)).unwrap());
        assert!(!repo.supplier_exists(SupplierId(-4)).unwrap());
    }
}
