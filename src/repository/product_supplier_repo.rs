// ==========================================
// 商品供应商导入 - 商品供应商关联 Repository Trait
// ==========================================
// 职责: 定义关联表数据访问接口（不包含业务逻辑）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::product_supplier::ProductSupplierLink;
use crate::domain::types::{CombinationId, LinkId, ProductId, SupplierId};
use crate::repository::error::RepositoryResult;

// ==========================================
// ProductSupplierRepository Trait
// ==========================================
// 实现者: ProductSupplierRepositoryImpl（使用 rusqlite）
pub trait ProductSupplierRepository: Send + Sync {
    /// 按 (商品, 组合, 供应商) 三元组精确查找关联 ID
    ///
    /// # 返回
    /// - Ok(Some(id)): 已存在
    /// - Ok(None): 不存在（需新建）
    fn find_id_by_product_and_supplier(
        &self,
        product_id: ProductId,
        combination_id: Option<CombinationId>,
        supplier_id: SupplierId,
    ) -> RepositoryResult<Option<LinkId>>;

    /// 按供应商参考号精确查找（区分大小写，多条时取 ID 最小者）
    fn find_by_reference(&self, reference: &str) -> RepositoryResult<Option<ProductSupplierLink>>;

    /// 按 ID 读取关联
    fn find_by_id(&self, id: LinkId) -> RepositoryResult<Option<ProductSupplierLink>>;

    /// 保存关联（id 为空则插入，否则更新）
    ///
    /// # 返回
    /// - Ok(LinkId): 落库后的关联 ID
    fn save(&self, link: &ProductSupplierLink) -> RepositoryResult<LinkId>;

    /// 清空关联表
    fn truncate_all(&self) -> RepositoryResult<()>;

    /// 统计关联数量
    fn count(&self) -> RepositoryResult<usize>;
}
