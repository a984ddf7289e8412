//! Сервис каталога: трейт-шов для UI и его in-memory реализация.

use super::error::CatalogError;
use super::seed::{seed_categories, seed_skus};
use crate::domain::a001_sku::{Sku, SkuDto, SkuId, TokenPricing};
use crate::domain::a002_category::{Category, CategoryId, CategoryRow};
use crate::domain::common::AggregateId;

/// Контракт источника данных каталога.
///
/// UI-слой работает только через этот трейт; замена `InMemoryCatalog` на
/// реальный бэкенд не трогает представления.
pub trait CatalogService {
    fn list_skus(&self) -> Vec<Sku>;
    fn get_sku(&self, id: &SkuId) -> Option<Sku>;
    /// Вставка при `dto.id == None`, обновление при `Some`
    fn upsert_sku(&mut self, dto: &SkuDto) -> Result<Sku, CatalogError>;
    fn delete_sku(&mut self, id: &SkuId) -> Result<(), CatalogError>;
    /// Копия SKU со свежим уникальным кодом
    fn duplicate_sku(&mut self, id: &SkuId) -> Result<Sku, CatalogError>;

    /// Категории с живым количеством SKU
    fn list_categories(&self) -> Vec<CategoryRow>;
    fn create_category(&mut self, name: &str) -> Result<CategoryRow, CatalogError>;
    /// Ошибка `CategoryInUse`, пока на категорию ссылается хотя бы один SKU
    fn delete_category(&mut self, id: &CategoryId) -> Result<(), CatalogError>;
}

/// Каталог в памяти: состояние процесса, пересоздаётся из seed при перезагрузке
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    skus: Vec<Sku>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            skus: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Каталог с посевным набором (шесть SKU, пять категорий)
    pub fn seeded() -> Self {
        Self {
            skus: seed_skus(),
            categories: seed_categories(),
        }
    }

    /// Живой счётчик: сколько SKU ссылается на категорию по имени
    pub fn sku_count_for(&self, category_name: &str) -> usize {
        self.skus
            .iter()
            .filter(|sku| sku.category == category_name)
            .count()
    }

    fn code_taken(&self, code: &str, exclude: Option<&SkuId>) -> bool {
        self.skus
            .iter()
            .any(|sku| sku.base.code == code && exclude != Some(&sku.base.id))
    }

    /// Следующий код категории формата "C###"
    fn next_category_code(&self) -> String {
        let max_seq = self
            .categories
            .iter()
            .filter_map(|cat| cat.base.code.strip_prefix('C'))
            .filter_map(|n| n.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("C{:03}", max_seq + 1)
    }

    fn apply_dto(sku: &mut Sku, dto: &SkuDto, pricing: TokenPricing) {
        sku.base.code = dto.code.trim().to_string();
        sku.base.description = dto.name.trim().to_string();
        sku.full_description = dto.full_description.clone();
        sku.category = dto.category.trim().to_string();
        sku.pricing = pricing;
        sku.features = dto.features.clone();
        sku.popular = dto.popular;
        sku.status = dto.status;
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Разбор ценового поля: пустая строка — "план не предлагается" (0),
/// нечисловой ввод — явная ошибка, не молчаливый ноль
fn parse_tokens(field: &'static str, value: &str) -> Result<u32, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| CatalogError::InvalidPricing {
            field,
            value: value.to_string(),
        })
}

fn parse_pricing(dto: &SkuDto) -> Result<TokenPricing, CatalogError> {
    Ok(TokenPricing {
        ppu_tokens: parse_tokens("Pay-per-Use tokens", &dto.ppu_tokens)?,
        monthly_tokens: parse_tokens("Monthly tokens", &dto.monthly_tokens)?,
        one_year_tokens: parse_tokens("1 Year tokens", &dto.one_year_tokens)?,
        three_year_tokens: parse_tokens("3 Year tokens", &dto.three_year_tokens)?,
    })
}

impl CatalogService for InMemoryCatalog {
    fn list_skus(&self) -> Vec<Sku> {
        self.skus.clone()
    }

    fn get_sku(&self, id: &SkuId) -> Option<Sku> {
        self.skus.iter().find(|sku| &sku.base.id == id).cloned()
    }

    fn upsert_sku(&mut self, dto: &SkuDto) -> Result<Sku, CatalogError> {
        dto.validate().map_err(CatalogError::Validation)?;
        let pricing = parse_pricing(dto)?;
        let code = dto.code.trim();

        match &dto.id {
            None => {
                if self.code_taken(code, None) {
                    return Err(CatalogError::DuplicateCode {
                        code: code.to_string(),
                    });
                }
                let mut sku = Sku::new_for_insert(
                    code.to_string(),
                    dto.name.trim().to_string(),
                    dto.full_description.clone(),
                );
                Self::apply_dto(&mut sku, dto, pricing);
                self.skus.push(sku.clone());
                Ok(sku)
            }
            Some(id_str) => {
                let id = SkuId::from_string(id_str).map_err(CatalogError::Validation)?;
                if self.code_taken(code, Some(&id)) {
                    return Err(CatalogError::DuplicateCode {
                        code: code.to_string(),
                    });
                }
                let sku = self
                    .skus
                    .iter_mut()
                    .find(|sku| sku.base.id == id)
                    .ok_or_else(|| CatalogError::NotFound {
                        id: id_str.clone(),
                    })?;
                Self::apply_dto(sku, dto, pricing);
                sku.before_write();
                Ok(sku.clone())
            }
        }
    }

    fn delete_sku(&mut self, id: &SkuId) -> Result<(), CatalogError> {
        let before = self.skus.len();
        self.skus.retain(|sku| &sku.base.id != id);
        if self.skus.len() == before {
            return Err(CatalogError::NotFound {
                id: id.as_string(),
            });
        }
        Ok(())
    }

    fn duplicate_sku(&mut self, id: &SkuId) -> Result<Sku, CatalogError> {
        let source = self.get_sku(id).ok_or_else(|| CatalogError::NotFound {
            id: id.as_string(),
        })?;

        // Подбираем свободный код: "M10001-copy", "M10001-copy2", ...
        let mut copy_code = format!("{}-copy", source.base.code);
        let mut n = 1;
        while self.code_taken(&copy_code, None) {
            n += 1;
            copy_code = format!("{}-copy{}", source.base.code, n);
        }

        let mut copy =
            Sku::new_for_insert(copy_code, source.base.description.clone(), source.full_description.clone());
        copy.category = source.category.clone();
        copy.pricing = source.pricing;
        copy.features = source.features.clone();
        copy.popular = source.popular;
        copy.status = source.status;
        self.skus.push(copy.clone());
        Ok(copy)
    }

    fn list_categories(&self) -> Vec<CategoryRow> {
        self.categories
            .iter()
            .map(|cat| CategoryRow::from_aggregate(cat, self.sku_count_for(cat.name())))
            .collect()
    }

    fn create_category(&mut self, name: &str) -> Result<CategoryRow, CatalogError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::EmptyCategoryName);
        }
        if self.categories.iter().any(|cat| cat.name() == trimmed) {
            return Err(CatalogError::DuplicateCategory {
                name: trimmed.to_string(),
            });
        }
        let category =
            Category::new_for_insert(self.next_category_code(), trimmed.to_string(), None);
        let row = CategoryRow::from_aggregate(&category, 0);
        self.categories.push(category);
        Ok(row)
    }

    fn delete_category(&mut self, id: &CategoryId) -> Result<(), CatalogError> {
        let category = self
            .categories
            .iter()
            .find(|cat| &cat.base.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound {
                id: id.as_string(),
            })?;

        // Инвариант живёт в мутации, а не в disabled-кнопке
        let sku_count = self.sku_count_for(category.name());
        if sku_count > 0 {
            return Err(CatalogError::CategoryInUse {
                name: category.name().to_string(),
                sku_count,
            });
        }
        self.categories.retain(|cat| &cat.base.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sku::SkuStatus;

    fn dto(code: &str, name: &str) -> SkuDto {
        SkuDto {
            code: code.into(),
            name: name.into(),
            ..SkuDto::default()
        }
    }

    #[test]
    fn seeded_catalog_has_six_skus_and_five_categories() {
        let catalog = InMemoryCatalog::seeded();
        assert_eq!(catalog.list_skus().len(), 6);
        assert_eq!(catalog.list_categories().len(), 5);
    }

    #[test]
    fn seeded_category_counts_are_derived_from_skus() {
        let catalog = InMemoryCatalog::seeded();
        let rows = catalog.list_categories();
        let channels = rows.iter().find(|r| r.name == "Channels").unwrap();
        assert_eq!(channels.sku_count, 2);
        let core = rows.iter().find(|r| r.name == "Core Services").unwrap();
        assert_eq!(core.sku_count, 1);
    }

    #[test]
    fn insert_rejects_duplicate_business_code() {
        let mut catalog = InMemoryCatalog::seeded();
        let err = catalog.upsert_sku(&dto("M10001", "Clone")).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateCode {
                code: "M10001".into()
            }
        );
        assert_eq!(catalog.list_skus().len(), 6);
    }

    #[test]
    fn insert_appends_and_update_edits_in_place() {
        let mut catalog = InMemoryCatalog::seeded();
        let created = catalog.upsert_sku(&dto("M10006", "New Channel")).unwrap();
        assert_eq!(catalog.list_skus().len(), 7);
        assert_eq!(created.base.metadata.version, 0);

        let mut edit = SkuDto::from_aggregate(&created);
        edit.name = "Renamed Channel".into();
        let updated = catalog.upsert_sku(&edit).unwrap();
        assert_eq!(updated.base.id, created.base.id);
        assert_eq!(updated.base.description, "Renamed Channel");
        assert_eq!(updated.base.metadata.version, 1);
        assert_eq!(catalog.list_skus().len(), 7);
    }

    #[test]
    fn update_keeps_own_code_without_duplicate_error() {
        let mut catalog = InMemoryCatalog::seeded();
        let sku = catalog.list_skus().into_iter().next().unwrap();
        let edit = SkuDto::from_aggregate(&sku);
        assert!(catalog.upsert_sku(&edit).is_ok());
    }

    #[test]
    fn non_numeric_pricing_is_rejected_explicitly() {
        let mut catalog = InMemoryCatalog::seeded();
        let mut bad = dto("M10006", "New Channel");
        bad.monthly_tokens = "abc".into();
        match catalog.upsert_sku(&bad).unwrap_err() {
            CatalogError::InvalidPricing { field, value } => {
                assert_eq!(field, "Monthly tokens");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_pricing_is_rejected() {
        let mut catalog = InMemoryCatalog::seeded();
        let mut bad = dto("M10006", "New Channel");
        bad.ppu_tokens = "-5".into();
        assert!(matches!(
            catalog.upsert_sku(&bad).unwrap_err(),
            CatalogError::InvalidPricing { .. }
        ));
    }

    #[test]
    fn empty_pricing_field_means_not_offered() {
        let mut catalog = InMemoryCatalog::seeded();
        let created = catalog.upsert_sku(&dto("M10006", "New Channel")).unwrap();
        assert_eq!(created.pricing, TokenPricing::default());
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        let mut catalog = InMemoryCatalog::seeded();
        let err = catalog.upsert_sku(&dto("M10006", "  ")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn delete_sku_removes_and_errors_on_unknown() {
        let mut catalog = InMemoryCatalog::seeded();
        let sku = catalog.list_skus().into_iter().next().unwrap();
        catalog.delete_sku(&sku.base.id).unwrap();
        assert_eq!(catalog.list_skus().len(), 5);
        assert!(matches!(
            catalog.delete_sku(&sku.base.id).unwrap_err(),
            CatalogError::NotFound { .. }
        ));
    }

    #[test]
    fn duplicate_sku_generates_fresh_unique_code() {
        let mut catalog = InMemoryCatalog::seeded();
        let source = catalog.list_skus().into_iter().next().unwrap();
        let first = catalog.duplicate_sku(&source.base.id).unwrap();
        assert_eq!(first.base.code, "M10001-copy");
        let second = catalog.duplicate_sku(&source.base.id).unwrap();
        assert_eq!(second.base.code, "M10001-copy2");
        assert_ne!(first.base.id, source.base.id);
        assert_eq!(first.pricing, source.pricing);
        assert_eq!(catalog.list_skus().len(), 8);
    }

    #[test]
    fn create_category_rejects_blank_name() {
        let mut catalog = InMemoryCatalog::seeded();
        let before = catalog.list_categories().len();
        assert_eq!(
            catalog.create_category("   ").unwrap_err(),
            CatalogError::EmptyCategoryName
        );
        assert_eq!(catalog.list_categories().len(), before);
    }

    #[test]
    fn create_category_appends_one_row_with_zero_count() {
        let mut catalog = InMemoryCatalog::seeded();
        let row = catalog.create_category("  Beta  ").unwrap();
        assert_eq!(row.name, "Beta");
        assert_eq!(row.sku_count, 0);
        assert_eq!(row.code, "C006");
        assert_eq!(catalog.list_categories().len(), 6);
    }

    #[test]
    fn create_category_rejects_duplicates() {
        let mut catalog = InMemoryCatalog::seeded();
        assert_eq!(
            catalog.create_category("Channels").unwrap_err(),
            CatalogError::DuplicateCategory {
                name: "Channels".into()
            }
        );
    }

    #[test]
    fn delete_category_in_use_fails_and_leaves_set_unchanged() {
        let mut catalog = InMemoryCatalog::seeded();
        let channels = catalog
            .list_categories()
            .into_iter()
            .find(|r| r.name == "Channels")
            .unwrap();
        let id = CategoryId::from_string(&channels.id).unwrap();
        assert_eq!(
            catalog.delete_category(&id).unwrap_err(),
            CatalogError::CategoryInUse {
                name: "Channels".into(),
                sku_count: 2
            }
        );
        assert_eq!(catalog.list_categories().len(), 5);
    }

    #[test]
    fn delete_category_succeeds_once_skus_are_gone() {
        let mut catalog = InMemoryCatalog::seeded();
        // Единственный SKU категории Subscriptions
        let sub = catalog
            .list_skus()
            .into_iter()
            .find(|s| s.category == "Subscriptions")
            .unwrap();
        catalog.delete_sku(&sub.base.id).unwrap();

        let row = catalog
            .list_categories()
            .into_iter()
            .find(|r| r.name == "Subscriptions")
            .unwrap();
        assert_eq!(row.sku_count, 0);
        let id = CategoryId::from_string(&row.id).unwrap();
        catalog.delete_category(&id).unwrap();
        assert_eq!(catalog.list_categories().len(), 4);
    }

    #[test]
    fn counts_track_sku_category_edits() {
        let mut catalog = InMemoryCatalog::seeded();
        let sku = catalog
            .list_skus()
            .into_iter()
            .find(|s| s.base.code == "M10005")
            .unwrap();
        let mut edit = SkuDto::from_aggregate(&sku);
        edit.category = "Channels".into();
        catalog.upsert_sku(&edit).unwrap();

        let rows = catalog.list_categories();
        assert_eq!(
            rows.iter().find(|r| r.name == "Channels").unwrap().sku_count,
            3
        );
        assert_eq!(
            rows.iter()
                .find(|r| r.name == "Professional")
                .unwrap()
                .sku_count,
            0
        );
    }

    #[test]
    fn inactive_status_round_trips_through_upsert() {
        let mut catalog = InMemoryCatalog::seeded();
        let mut new = dto("M10006", "New Channel");
        new.status = SkuStatus::Inactive;
        let created = catalog.upsert_sku(&new).unwrap();
        assert!(!created.status.is_active());
    }
}
