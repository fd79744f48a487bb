// ==========================================
// 商品供应商导入 - 批量驱动
// ==========================================
// 职责: 逐行读取 JSON 行 → 调用导入实体 → 输出逐行结果
// 约束:
// - 单行失败（解码失败/数据访问失败）只记入该行，不中断整批
// - validate_only 时不执行清空
// ==========================================

use crate::domain::import::{ImportResult, ImportRow, RowError};
use crate::importer::entity_type_trait::ImportEntityType;
use crate::importer::error::ImportError;
use chrono::Utc;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

// ==========================================
// BatchOptions - 批量导入选项
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub validate_only: bool,
    pub truncate: bool,
}

// ==========================================
// BatchSummary - 批量导入汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub persisted: usize, // 无错误无警告（validate_only 时表示可落库）
    pub skipped: usize,   // 有警告（未能定位）
    pub failed: usize,    // 有错误（校验/解码/数据访问失败）
    pub truncated: bool,
    pub validate_only: bool,
    pub started_at: String,
}

#[derive(Serialize)]
struct RowReport<'a> {
    row: usize,
    errors: &'a [RowError],
    warnings: &'a [String],
}

/// 执行一批导入
///
/// # 参数
/// - entity: 导入实体
/// - options: 批量选项
/// - input: 每行一个 JSON 对象
/// - output: 逐行写出处理结果
///
/// # 返回
/// - Ok(BatchSummary): 汇总
/// - Err: 清空失败或输入输出失败
pub fn run_batch<I, O>(
    entity: &dyn ImportEntityType,
    options: BatchOptions,
    input: I,
    mut output: O,
) -> Result<BatchSummary, ImportError>
where
    I: BufRead,
    O: Write,
{
    let mut summary = BatchSummary {
        validate_only: options.validate_only,
        started_at: Utc::now().to_rfc3339(),
        ..Default::default()
    };

    if options.truncate {
        if options.validate_only {
            warn!("仅校验模式，跳过清空");
        } else if !entity.support_truncate() {
            return Err(ImportError::TruncateFailed(format!(
                "{} 不支持清空",
                entity.get_name()
            )));
        } else {
            entity
                .truncate()
                .map_err(|messages| ImportError::TruncateFailed(messages.join("; ")))?;
            summary.truncated = true;
            info!("已清空 {}", entity.get_name());
        }
    }

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row_number = index + 1;
        summary.rows += 1;

        let result = import_line(entity, &line, row_number, options.validate_only);
        if !result.errors.is_empty() {
            summary.failed += 1;
        } else if !result.warnings.is_empty() {
            summary.skipped += 1;
        } else {
            summary.persisted += 1;
        }

        let report = RowReport {
            row: row_number,
            errors: &result.errors,
            warnings: &result.warnings,
        };
        writeln!(output, "{}", serde_json::to_string(&report)?)?;
    }

    info!(
        rows = summary.rows,
        persisted = summary.persisted,
        skipped = summary.skipped,
        failed = summary.failed,
        "导入完成"
    );
    Ok(summary)
}

// 单行失败统一折叠为该行的错误
fn import_line(
    entity: &dyn ImportEntityType,
    line: &str,
    row_number: usize,
    validate_only: bool,
) -> ImportResult {
    let row: ImportRow = match serde_json::from_str(line) {
        Ok(row) => row,
        Err(e) => {
            let err = ImportError::RowDecodeError {
                row: row_number,
                message: e.to_string(),
            };
            warn!("{}", err);
            return failed_row(err);
        }
    };

    match entity.import(&row, validate_only) {
        Ok(result) => result,
        Err(e) => {
            error!(row = row_number, error = %e, "行导入失败");
            failed_row(e)
        }
    }
}

fn failed_row(err: ImportError) -> ImportResult {
    ImportResult {
        errors: vec![RowError::Message(err.to_string())],
        warnings: Vec::new(),
    }
}
