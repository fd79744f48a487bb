// ==========================================
// 商品供应商导入 - 商品供应商导入实体实现
// ==========================================
// 职责: 单行解析 → 实体定位 → 字段赋值 → 校验 → 落库（或仅校验）
// 流程:
// 1. 选择定位方式（id_product 优先，其次 reference）
// 2. 按 ID 或按供应商参考号解析 商品/组合/供应商
// 3. 商品与供应商均解析成功才继续
// 4. 按三元组查找已有关联（find-or-create）
// 5. 赋值 + 币种解析
// 6. 字段校验 / 多语言字段校验
// 7. 非 validate_only 且无错误时落库
// ==========================================
// 约束: 行与行之间无共享状态
// ==========================================

use crate::config::{ConfigManager, ImportConfigReader};
use crate::domain::import::{ImportField, ImportResult, ImportRow, RowError, RowValue};
use crate::domain::product_supplier::ProductSupplierLink;
use crate::domain::types::{CombinationId, CurrencyId, LinkId, ProductId, SupplierId};
use crate::i18n::{I18nTranslator, Translator};
use crate::importer::entity_type_trait::{AvailableField, ImportEntityType};
use crate::importer::error::ImportError;
use crate::importer::link_validator::{LinkValidator, ProductSupplierValidator};
use crate::importer::value_parser::{is_truthy, parse_int, parse_number, text_of, trimmed_text};
use crate::repository::{
    CatalogRepository, CatalogRepositoryImpl, CurrencyRepository, CurrencyRepositoryImpl,
    ProductSupplierRepository, ProductSupplierRepositoryImpl, RepositoryResult,
};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, instrument, warn};

// ==========================================
// ResolvedIdentity - 定位结果
// ==========================================
#[derive(Debug, Default)]
struct ResolvedIdentity {
    link_id: Option<LinkId>,
    product_id: Option<ProductId>,
    combination_id: Option<CombinationId>,
    supplier_id: Option<SupplierId>,
}

// ==========================================
// ProductSupplierImportEntityType
// ==========================================
pub struct ProductSupplierImportEntityType<R, C>
where
    R: ProductSupplierRepository,
    C: ImportConfigReader,
{
    // 关联表仓储
    link_repo: R,

    // 店铺配置（默认币种）
    config: C,

    // 协作组件
    catalog: Box<dyn CatalogRepository>,
    currencies: Box<dyn CurrencyRepository>,
    validator: Box<dyn LinkValidator>,
    translator: Arc<dyn Translator>,
}

impl<R, C> ProductSupplierImportEntityType<R, C>
where
    R: ProductSupplierRepository,
    C: ImportConfigReader,
{
    /// 创建导入实体
    ///
    /// # 参数
    /// - link_repo: 关联表仓储
    /// - config: 店铺配置读取器
    /// - catalog: 商品/供应商存在性查询
    /// - currencies: 币种查询
    /// - validator: 字段校验器
    /// - translator: 提示信息翻译器
    pub fn new(
        link_repo: R,
        config: C,
        catalog: Box<dyn CatalogRepository>,
        currencies: Box<dyn CurrencyRepository>,
        validator: Box<dyn LinkValidator>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            link_repo,
            config,
            catalog,
            currencies,
            validator,
            translator,
        }
    }

    fn l(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// 是否按供应商参考号定位
    ///
    /// # 返回
    /// - Some(reference): id_product 缺失或为假值，且 reference 非空（已 TRIM）
    /// - None: 按 ID 定位
    fn match_by_reference(&self, row: &ImportRow) -> Option<String> {
        if row.get(ImportField::ProductId).is_some_and(is_truthy) {
            return None;
        }
        row.get(ImportField::SupplierReference).and_then(trimmed_text)
    }

    /// 按供应商参考号定位：命中则沿用已有关联的全部标识
    ///
    /// 查找使用 TRIM 后的参考号，警告中回显原始输入
    fn resolve_by_reference(
        &self,
        row: &ImportRow,
        reference: &str,
        warnings: &mut Vec<String>,
    ) -> Result<ResolvedIdentity, ImportError> {
        match self.link_repo.find_by_reference(reference)? {
            Some(existing) => {
                debug!(reference = %reference, link_id = ?existing.id, "按供应商参考号命中已有关联");
                Ok(ResolvedIdentity {
                    link_id: existing.id,
                    product_id: ProductId::from_raw(existing.product_id.get()),
                    combination_id: existing.combination_id,
                    supplier_id: SupplierId::from_raw(existing.supplier_id.get()),
                })
            }
            None => {
                warn!(reference = %reference, "供应商参考号未命中");
                let raw = row
                    .get(ImportField::SupplierReference)
                    .map(text_of)
                    .unwrap_or_default();
                warnings.push(self.translator.translate_with_args(
                    "import.reference_unresolved",
                    &[("reference", raw.as_str())],
                ));
                Ok(ResolvedIdentity::default())
            }
        }
    }

    /// 按 ID 定位（商品 → 组合 → 供应商，警告按此顺序产生）
    fn resolve_by_ids(
        &self,
        row: &ImportRow,
        warnings: &mut Vec<String>,
    ) -> Result<ResolvedIdentity, ImportError> {
        let product_id = self.resolve_product_id(row, warnings)?;
        let combination_id = Self::resolve_combination_id(row);
        let supplier_id = self.resolve_supplier_id(row, warnings)?;

        Ok(ResolvedIdentity {
            link_id: None,
            product_id,
            combination_id,
            supplier_id,
        })
    }

    fn resolve_product_id(
        &self,
        row: &ImportRow,
        warnings: &mut Vec<String>,
    ) -> Result<Option<ProductId>, ImportError> {
        let raw = row.get(ImportField::ProductId).map(parse_int).unwrap_or(0);

        let Some(product_id) = ProductId::from_raw(raw) else {
            warnings.push(self.l("import.product_unresolved"));
            return Ok(None);
        };

        if !self.catalog.product_exists(product_id)? {
            warn!(product_id = raw, "商品不存在，跳过该行");
            warnings.push(self.translator.translate_with_args(
                "import.product_not_found",
                &[("id", raw.to_string().as_str())],
            ));
            return Ok(None);
        }

        Ok(Some(product_id))
    }

    fn resolve_supplier_id(
        &self,
        row: &ImportRow,
        warnings: &mut Vec<String>,
    ) -> Result<Option<SupplierId>, ImportError> {
        let raw = row.get(ImportField::SupplierId).map(parse_int).unwrap_or(0);

        let Some(supplier_id) = SupplierId::from_raw(raw) else {
            warnings.push(self.l("import.supplier_unresolved"));
            return Ok(None);
        };

        if !self.catalog.supplier_exists(supplier_id)? {
            warn!(supplier_id = raw, "供应商不存在，跳过该行");
            warnings.push(self.translator.translate_with_args(
                "import.supplier_not_found",
                &[("id", raw.to_string().as_str())],
            ));
            return Ok(None);
        }

        Ok(Some(supplier_id))
    }

    // 组合不做存在性校验
    fn resolve_combination_id(row: &ImportRow) -> Option<CombinationId> {
        row.get(ImportField::CombinationId)
            .map(parse_int)
            .and_then(CombinationId::from_raw)
    }

    /// 币种解析
    ///
    /// # 规则
    /// 1. 整数值 → 直接使用（不校验存在性）
    /// 2. 其他值 → 按 ISO 代码查找
    /// 3. 缺失或查找失败 → 店铺默认币种
    fn resolve_currency_id(&self, row: &ImportRow) -> Result<CurrencyId, ImportError> {
        match row.get(ImportField::Currency) {
            Some(RowValue::Int(id)) => return Ok(CurrencyId(*id)),
            Some(other) => {
                let iso_code = text_of(other);
                if let Some(id) = self.currencies.find_id_by_iso_code(&iso_code)? {
                    return Ok(id);
                }
                debug!(iso_code = %iso_code, "币种代码未命中，使用默认币种");
            }
            None => {}
        }

        Ok(self.config.get_default_currency_id()?)
    }
}

/// 基于 SQLite 的导入实体
pub type SqliteProductSupplierImportEntity =
    ProductSupplierImportEntityType<ProductSupplierRepositoryImpl, ConfigManager>;

impl SqliteProductSupplierImportEntity {
    /// 基于共享连接装配全部协作组件
    ///
    /// # 说明
    /// - 提示信息语言取自店铺配置 import_locale
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let config = ConfigManager::from_connection(conn.clone());
        let locale = config.get_locale()?;
        let translator: Arc<dyn Translator> = Arc::new(I18nTranslator::new(locale));

        Ok(Self::new(
            ProductSupplierRepositoryImpl::from_connection(conn.clone()),
            config,
            Box::new(CatalogRepositoryImpl::from_connection(conn.clone())),
            Box::new(CurrencyRepositoryImpl::from_connection(conn)),
            Box::new(ProductSupplierValidator::new(translator.clone())),
            translator,
        ))
    }
}

impl<R, C> ImportEntityType for ProductSupplierImportEntityType<R, C>
where
    R: ProductSupplierRepository,
    C: ImportConfigReader,
{
    fn get_name(&self) -> String {
        self.l("entity.name")
    }

    fn get_available_fields(&self) -> Vec<AvailableField> {
        ImportField::ALL
            .iter()
            .map(|field| {
                let label_key = match field {
                    ImportField::Ignore => "fields.ignore".to_string(),
                    other => format!("fields.{}", other.key()),
                };
                AvailableField {
                    key: field.key(),
                    label: self.l(&label_key),
                }
            })
            .collect()
    }

    fn support_truncate(&self) -> bool {
        true
    }

    fn truncate(&self) -> Result<(), Vec<String>> {
        self.link_repo.truncate_all().map_err(|e| {
            error!(error = %e, "清空商品供应商关联失败");
            vec![e.to_string()]
        })
    }

    #[instrument(skip(self, row))]
    fn import(&self, row: &ImportRow, validate_only: bool) -> Result<ImportResult, ImportError> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // === 步骤 1-3: 定位商品/组合/供应商 ===
        let resolved = match self.match_by_reference(row) {
            Some(reference) => self.resolve_by_reference(row, &reference, &mut warnings)?,
            None => self.resolve_by_ids(row, &mut warnings)?,
        };

        // === 步骤 4: 商品与供应商缺一不可 ===
        let (Some(product_id), Some(supplier_id)) = (resolved.product_id, resolved.supplier_id)
        else {
            debug!(warnings = warnings.len(), "未能定位商品供应商，跳过该行");
            return Ok(ImportResult { errors, warnings });
        };
        let combination_id = resolved.combination_id;

        // === 步骤 5: 三元组 find-or-create ===
        let link_id = match resolved.link_id {
            Some(id) => Some(id),
            None => self
                .link_repo
                .find_id_by_product_and_supplier(product_id, combination_id, supplier_id)?,
        };

        // === 步骤 6: 赋值（已有关联保留行中未给出的字段）===
        let currency_id = self.resolve_currency_id(row)?;
        let existing = match link_id {
            Some(id) => self.link_repo.find_by_id(id)?,
            None => None,
        };
        let mut link = existing.unwrap_or_else(|| {
            ProductSupplierLink::new(product_id, combination_id, supplier_id, currency_id)
        });
        link.product_id = product_id;
        link.combination_id = combination_id;
        link.supplier_id = supplier_id;
        link.currency_id = currency_id;
        if let Some(price) = row.get(ImportField::Price) {
            link.price_tax_excluded = parse_number(price);
        }
        if let Some(reference) = row.get(ImportField::SupplierReference) {
            link.supplier_reference = trimmed_text(reference);
        }

        // === 步骤 7: 校验 ===
        if let Err(violations) = self.validator.validate_fields(&link) {
            errors.push(RowError::Validation(violations));
        }
        if let Err(violations) = self.validator.validate_fields_lang(&link) {
            errors.push(RowError::Validation(violations));
        }

        // === 步骤 8: 落库 ===
        if !errors.is_empty() {
            warn!(
                product_id = %product_id,
                supplier_id = %supplier_id,
                errors = errors.len(),
                "商品供应商关联校验失败"
            );
        } else if validate_only {
            debug!(product_id = %product_id, supplier_id = %supplier_id, "仅校验模式，跳过落库");
        } else {
            let saved_id = self.link_repo.save(&link)?;
            info!(
                link_id = %saved_id,
                product_id = %product_id,
                supplier_id = %supplier_id,
                created = link.is_new(),
                "商品供应商关联已保存"
            );
        }

        Ok(ImportResult { errors, warnings })
    }
}
