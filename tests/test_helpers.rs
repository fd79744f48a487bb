// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================

#![allow(dead_code)]

use import_product_supplier::config::ConfigManager;
use import_product_supplier::db::{init_schema, open_sqlite_connection};
use rusqlite::{params, Connection};
use std::error::Error;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - Arc<Mutex<Connection>>: 共享连接
pub fn create_test_db() -> Result<(NamedTempFile, Arc<Mutex<Connection>>), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("临时文件路径不是合法 UTF-8")?
        .to_string();

    let conn = open_sqlite_connection(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, Arc::new(Mutex::new(conn))))
}

/// 插入商品
pub fn insert_product(conn: &Arc<Mutex<Connection>>, id_product: i64) {
    let conn = conn.lock().unwrap();
    conn.execute(
        "INSERT INTO product (id_product, reference) VALUES (?1, ?2)",
        params![id_product, format!("P-{}", id_product)],
    )
    .unwrap();
}

/// 删除商品
pub fn delete_product(conn: &Arc<Mutex<Connection>>, id_product: i64) {
    let conn = conn.lock().unwrap();
    conn.execute("DELETE FROM product WHERE id_product = ?1", params![id_product])
        .unwrap();
}

/// 插入供应商
pub fn insert_supplier(conn: &Arc<Mutex<Connection>>, id_supplier: i64, name: &str) {
    let conn = conn.lock().unwrap();
    conn.execute(
        "INSERT INTO supplier (id_supplier, name) VALUES (?1, ?2)",
        params![id_supplier, name],
    )
    .unwrap();
}

/// 插入币种
pub fn insert_currency(conn: &Arc<Mutex<Connection>>, id_currency: i64, iso_code: &str) {
    let conn = conn.lock().unwrap();
    conn.execute(
        "INSERT INTO currency (id_currency, iso_code, deleted) VALUES (?1, ?2, 0)",
        params![id_currency, iso_code],
    )
    .unwrap();
}

/// 写入全局配置
pub fn insert_test_config(conn: &Arc<Mutex<Connection>>, key: &str, value: &str) {
    ConfigManager::from_connection(conn.clone())
        .set_global_config_value(key, value)
        .unwrap();
}

/// 关联表行数
pub fn count_links(conn: &Arc<Mutex<Connection>>) -> i64 {
    let conn = conn.lock().unwrap();
    conn.query_row("SELECT COUNT(*) FROM product_supplier", [], |row| row.get(0))
        .unwrap()
}

/// 标准测试数据: 商品 12 / 供应商 4 / 币种 1(EUR) 与 2(USD)，默认币种 1
pub fn seed_catalog(conn: &Arc<Mutex<Connection>>) {
    insert_product(conn, 12);
    insert_supplier(conn, 4, "ACME");
    insert_currency(conn, 1, "EUR");
    insert_currency(conn, 2, "USD");
    insert_test_config(conn, "PS_CURRENCY_DEFAULT", "1");
}
