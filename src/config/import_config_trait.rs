// ==========================================
// 商品供应商导入 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::domain::types::CurrencyId;
use crate::repository::error::RepositoryResult;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的店铺配置
// 实现者: ConfigManager（从 config_kv 表读取）
pub trait ImportConfigReader: Send + Sync {
    /// 获取店铺默认币种
    ///
    /// # 默认值
    /// - 1
    ///
    /// # 用途
    /// - 行数据未给出币种或币种代码无法解析时使用
    fn get_default_currency_id(&self) -> RepositoryResult<CurrencyId>;

    /// 获取导入提示信息所用语言
    ///
    /// # 默认值
    /// - "en"
    fn get_locale(&self) -> RepositoryResult<String>;
}
