// ==========================================
// 商品供应商导入 - 命令行驱动
// ==========================================
// 用法:
//   import-product-supplier [db_path] [--validate-only] [--truncate] < rows.jsonl
//
// 输入: 每行一个 JSON 对象（已解码的导入行，键为字段名）
//       值可为字符串、数字或 null（null 视为该列缺失）
// 输出: stdout 逐行输出处理结果，最后输出汇总；日志写 stderr
// 说明: 与 --validate-only 同时给出时 --truncate 不生效
// ==========================================

use anyhow::Context;
use import_product_supplier::config::{ConfigManager, ImportConfigReader};
use import_product_supplier::db::{init_schema, open_sqlite_connection};
use import_product_supplier::i18n::I18nTranslator;
use import_product_supplier::importer::product_supplier_importer::SqliteProductSupplierImportEntity;
use import_product_supplier::importer::{run_batch, BatchOptions, ImportEntityRegistry};
use import_product_supplier::logging;
use import_product_supplier::module::{self, ModuleInfo, MODULE_NAME};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

const DEFAULT_DB_PATH: &str = "import_product_supplier.db";

// ==========================================
// 命令行参数
// ==========================================
#[derive(Debug)]
struct CliArgs {
    db_path: String,
    validate_only: bool,
    truncate: bool,
}

fn parse_args() -> CliArgs {
    let mut db_path = None;
    let mut validate_only = false;
    let mut truncate = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--validate-only" => validate_only = true,
            "--truncate" => truncate = true,
            other if db_path.is_none() => db_path = Some(other.to_string()),
            other => tracing::warn!("忽略多余参数: {}", other),
        }
    }

    CliArgs {
        db_path: db_path.unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
        validate_only,
        truncate,
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = parse_args();

    let conn = open_sqlite_connection(&args.db_path)
        .with_context(|| format!("无法打开数据库: {}", args.db_path))?;
    init_schema(&conn).context("数据库初始化失败")?;
    let conn = Arc::new(Mutex::new(conn));

    let locale = ConfigManager::from_connection(conn.clone()).get_locale()?;
    let info = ModuleInfo::new(&I18nTranslator::new(locale));
    tracing::info!("==================================================");
    tracing::info!("{} v{}", info.display_name, info.version);
    tracing::info!("使用数据库: {}", args.db_path);
    tracing::info!("==================================================");

    // 通过注册表取得导入实体
    let mut registry = ImportEntityRegistry::new();
    module::register_import_entities(
        &mut registry,
        Box::new(SqliteProductSupplierImportEntity::from_connection(conn)?),
    );
    let entity = registry.require(MODULE_NAME)?;

    let options = BatchOptions {
        validate_only: args.validate_only,
        truncate: args.truncate,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_batch(entity, options, io::stdin().lock(), &mut out)?;

    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    Ok(())
}
