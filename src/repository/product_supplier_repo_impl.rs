// ==========================================
// 商品供应商导入 - 商品供应商关联 Repository 实现
// ==========================================
// 职责: 实现关联表数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::product_supplier::ProductSupplierLink;
use crate::domain::types::{
    combination_to_raw, CombinationId, CurrencyId, LinkId, ProductId, SupplierId,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::product_supplier_repo::ProductSupplierRepository;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const SELECT_LINK: &str = r#"
    SELECT id_product_supplier, id_product, id_product_attribute, id_supplier,
           id_currency, product_supplier_price_te, product_supplier_reference
    FROM product_supplier
"#;

fn map_link(row: &Row) -> rusqlite::Result<ProductSupplierLink> {
    Ok(ProductSupplierLink {
        id: Some(LinkId(row.get(0)?)),
        product_id: ProductId(row.get(1)?),
        combination_id: CombinationId::from_raw(row.get(2)?),
        supplier_id: SupplierId(row.get(3)?),
        currency_id: CurrencyId(row.get(4)?),
        price_tax_excluded: row.get(5)?,
        supplier_reference: row.get(6)?,
    })
}

// ==========================================
// ProductSupplierRepositoryImpl
// ==========================================
pub struct ProductSupplierRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProductSupplierRepositoryImpl {

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn insert(conn: &Connection, link: &ProductSupplierLink) -> RepositoryResult<LinkId> {
        conn.execute(
            r#"
            INSERT INTO product_supplier (
                id_product_supplier, id_product, id_product_attribute, id_supplier,
                id_currency, product_supplier_price_te, product_supplier_reference
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                link.id.map(LinkId::get),
                link.product_id.get(),
                combination_to_raw(link.combination_id),
                link.supplier_id.get(),
                link.currency_id.get(),
                link.price_tax_excluded,
                link.supplier_reference,
            ],
        )?;
        Ok(LinkId(conn.last_insert_rowid()))
    }
}

impl ProductSupplierRepository for ProductSupplierRepositoryImpl {
    fn find_id_by_product_and_supplier(
        &self,
        product_id: ProductId,
        combination_id: Option<CombinationId>,
        supplier_id: SupplierId,
    ) -> RepositoryResult<Option<LinkId>> {
        let conn = self.get_conn()?;

        let id = conn
            .query_row(
                r#"
                SELECT id_product_supplier FROM product_supplier
                WHERE id_product = ?1 AND id_product_attribute = ?2 AND id_supplier = ?3
                LIMIT 1
                "#,
                params![
                    product_id.get(),
                    combination_to_raw(combination_id),
                    supplier_id.get()
                ],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        Ok(id.map(LinkId))
    }

    fn find_by_reference(&self, reference: &str) -> RepositoryResult<Option<ProductSupplierLink>> {
        let conn = self.get_conn()?;

        let sql = format!(
            "{} WHERE product_supplier_reference = ?1 ORDER BY id_product_supplier LIMIT 1",
            SELECT_LINK
        );
        let link = conn.query_row(&sql, params![reference], map_link).optional()?;

        Ok(link)
    }

    fn find_by_id(&self, id: LinkId) -> RepositoryResult<Option<ProductSupplierLink>> {
        let conn = self.get_conn()?;

        let sql = format!("{} WHERE id_product_supplier = ?1", SELECT_LINK);
        let link = conn.query_row(&sql, params![id.get()], map_link).optional()?;

        Ok(link)
    }

    fn save(&self, link: &ProductSupplierLink) -> RepositoryResult<LinkId> {
        let conn = self.get_conn()?;

        let Some(id) = link.id else {
            let id = Self::insert(&conn, link)?;
            debug!(link_id = %id, "商品供应商关联已新建");
            return Ok(id);
        };

        let updated = conn.execute(
            r#"
            UPDATE product_supplier SET
                id_product = ?2,
                id_product_attribute = ?3,
                id_supplier = ?4,
                id_currency = ?5,
                product_supplier_price_te = ?6,
                product_supplier_reference = ?7
            WHERE id_product_supplier = ?1
            "#,
            params![
                id.get(),
                link.product_id.get(),
                combination_to_raw(link.combination_id),
                link.supplier_id.get(),
                link.currency_id.get(),
                link.price_tax_excluded,
                link.supplier_reference,
            ],
        )?;

        // 记录已被删除：按原 ID 重新插入
        if updated == 0 {
            return Self::insert(&conn, link);
        }

        debug!(link_id = %id, "商品供应商关联已更新");
        Ok(id)
    }

    fn truncate_all(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let deleted = tx.execute("DELETE FROM product_supplier", [])?;
        // 与 TRUNCATE 一致：自增序列归零
        tx.execute(
            "DELETE FROM sqlite_sequence WHERE name = 'product_supplier'",
            [],
        )?;

        tx.commit()?;
        info!(deleted = deleted, "商品供应商关联表已清空");
        Ok(())
    }

    fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM product_supplier", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{configure_sqlite_connection, init_schema};

    fn setup_repo() -> ProductSupplierRepositoryImpl {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        ProductSupplierRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn make_link(product: i64, combination: i64, supplier: i64) -> ProductSupplierLink {
        ProductSupplierLink::new(
            ProductId(product),
            CombinationId::from_raw(combination),
            SupplierId(supplier),
            CurrencyId(1),
        )
    }

    #[test]
    fn test_insert_and_find_by_triple() {
        let repo = setup_repo();

        let id = repo.save(&make_link(12, 0, 4)).unwrap();

        assert_eq!(
            repo.find_id_by_product_and_supplier(ProductId(12), None, SupplierId(4))
                .unwrap(),
            Some(id)
        );
        assert_eq!(
            repo.find_id_by_product_and_supplier(ProductId(12), Some(CombinationId(3)), SupplierId(4))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_update_keeps_single_row() {
        let repo = setup_repo();

        let id = repo.save(&make_link(12, 5, 4)).unwrap();

        let mut link = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(link.combination_id, Some(CombinationId(5)));
        link.price_tax_excluded = 7.5;
        link.supplier_reference = Some("SUP-001".to_string());

        assert_eq!(repo.save(&link).unwrap(), id);
        assert_eq!(repo.count().unwrap(), 1);

        let stored = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(stored.price_tax_excluded, 7.5);
        assert_eq!(stored.supplier_reference.as_deref(), Some("SUP-001"));
    }

    #[test]
    fn test_find_by_reference_is_exact() {
        let repo = setup_repo();

        let mut link = make_link(12, 0, 4);
        link.supplier_reference = Some("SUP-001".to_string());
        let id = repo.save(&link).unwrap();

        let found = repo.find_by_reference("SUP-001").unwrap().unwrap();
        assert_eq!(found.id, Some(id));
        assert!(repo.find_by_reference("sup-001").unwrap().is_none());
        assert!(repo.find_by_reference("SUP-00").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_triple_rejected() {
        let repo = setup_repo();
        repo.save(&make_link(12, 0, 4)).unwrap();

        let err = repo.save(&make_link(12, 0, 4)).unwrap_err();
        assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));
    }

    #[test]
    fn test_truncate_resets_sequence() {
        let repo = setup_repo();
        repo.save(&make_link(12, 0, 4)).unwrap();
        repo.save(&make_link(13, 0, 4)).unwrap();

        repo.truncate_all().unwrap();
        assert_eq!(repo.count().unwrap(), 0);

        let id = repo.save(&make_link(12, 0, 4)).unwrap();
        assert_eq!(id, LinkId(1));
    }
}
