// ==========================================
// 商品供应商导入 - 导入模块错误类型
// ==========================================
// 说明: 行级的解析/校验结果不走错误通道（见 ImportResult），
//       这里只承载基础设施故障
// 工具: thiserror 派生宏
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 数据访问错误 =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // ===== 行数据解码错误 =====
    #[error("行数据解码失败 (行 {row}): {message}")]
    RowDecodeError { row: usize, message: String },

    // ===== 注册错误 =====
    #[error("导入实体未注册: {0}")]
    EntityNotRegistered(String),

    // ===== 清空错误 =====
    #[error("清空失败: {0}")]
    TruncateFailed(String),

    // ===== 输入输出错误 =====
    #[error("读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("结果序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),
}
