use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuId(pub Uuid);

impl SkuId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SkuId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SkuId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Pricing
// ============================================================================

/// Тарифный план (строка в таблице цен)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingPlan {
    PayPerUse,
    Monthly,
    OneYear,
    ThreeYear,
}

impl PricingPlan {
    /// Все планы в порядке отображения
    pub const ALL: [PricingPlan; 4] = [
        PricingPlan::PayPerUse,
        PricingPlan::Monthly,
        PricingPlan::OneYear,
        PricingPlan::ThreeYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PricingPlan::PayPerUse => "Pay-per-Use",
            PricingPlan::Monthly => "Monthly",
            PricingPlan::OneYear => "1 Year",
            PricingPlan::ThreeYear => "3 Years",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            PricingPlan::PayPerUse => "trending-up",
            PricingPlan::Monthly => "calendar",
            PricingPlan::OneYear => "clock",
            PricingPlan::ThreeYear => "users",
        }
    }
}

/// Цены в токенах по четырём планам.
///
/// `0` — сентинел "план не предлагается" (рендерится как "N/A"),
/// это НЕ нулевая цена.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPricing {
    #[serde(rename = "ppuTokens", default)]
    pub ppu_tokens: u32,

    #[serde(rename = "monthlyTokens", default)]
    pub monthly_tokens: u32,

    #[serde(rename = "oneYearTokens", default)]
    pub one_year_tokens: u32,

    #[serde(rename = "threeYearTokens", default)]
    pub three_year_tokens: u32,
}

impl TokenPricing {
    pub fn new(ppu: u32, monthly: u32, one_year: u32, three_year: u32) -> Self {
        Self {
            ppu_tokens: ppu,
            monthly_tokens: monthly,
            one_year_tokens: one_year,
            three_year_tokens: three_year,
        }
    }

    /// Количество токенов для плана
    pub fn tokens_for(&self, plan: PricingPlan) -> u32 {
        match plan {
            PricingPlan::PayPerUse => self.ppu_tokens,
            PricingPlan::Monthly => self.monthly_tokens,
            PricingPlan::OneYear => self.one_year_tokens,
            PricingPlan::ThreeYear => self.three_year_tokens,
        }
    }

    /// Предлагается ли план (0 = не предлагается)
    pub fn is_offered(&self, plan: PricingPlan) -> bool {
        self.tokens_for(plan) > 0
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkuStatus {
    #[default]
    Active,
    Inactive,
}

impl SkuStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkuStatus::Active => "active",
            SkuStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, SkuStatus::Active)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// SKU — единица прайс-листа.
///
/// Бизнес-код (`base.code`, например "M10001") — видимый идентификатор SKU,
/// уникальность контролируется каталогом. Название живёт в `base.description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    #[serde(flatten)]
    pub base: BaseAggregate<SkuId>,

    /// Развёрнутое описание для карточки
    #[serde(rename = "fullDescription")]
    pub full_description: String,

    /// Категория — свободная строка, не внешний ключ
    #[serde(default)]
    pub category: String,

    pub pricing: TokenPricing,

    /// Список фич в порядке отображения, без дедупликации
    #[serde(default)]
    pub features: Vec<String>,

    /// Промо-флаг "Most Popular"
    #[serde(default)]
    pub popular: bool,

    #[serde(default)]
    pub status: SkuStatus,
}

impl Sku {
    pub fn new_for_insert(code: String, name: String, full_description: String) -> Self {
        Self {
            base: BaseAggregate::new(SkuId::new_v4(), code, name),
            full_description,
            category: String::new(),
            pricing: TokenPricing::default(),
            features: Vec::new(),
            popular: false,
            status: SkuStatus::Active,
        }
    }

    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Sku {
    type Id = SkuId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "sku"
    }

    fn element_name() -> &'static str {
        "SKU"
    }

    fn list_name() -> &'static str {
        "SKUs"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// DTO формы SKU.
///
/// Ценовые поля — строки: парсинг выполняет каталог и отвергает нечисловой
/// ввод явной ошибкой вместо молчаливого приведения к нулю.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkuDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    #[serde(rename = "fullDescription")]
    pub full_description: String,
    pub category: String,
    #[serde(rename = "ppuTokens")]
    pub ppu_tokens: String,
    #[serde(rename = "monthlyTokens")]
    pub monthly_tokens: String,
    #[serde(rename = "oneYearTokens")]
    pub one_year_tokens: String,
    #[serde(rename = "threeYearTokens")]
    pub three_year_tokens: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub status: SkuStatus,
}

impl SkuDto {
    /// DTO из существующего агрегата (для формы редактирования)
    pub fn from_aggregate(sku: &Sku) -> Self {
        Self {
            id: Some(sku.base.id.as_string()),
            code: sku.base.code.clone(),
            name: sku.base.description.clone(),
            full_description: sku.full_description.clone(),
            category: sku.category.clone(),
            ppu_tokens: sku.pricing.ppu_tokens.to_string(),
            monthly_tokens: sku.pricing.monthly_tokens.to_string(),
            one_year_tokens: sku.pricing.one_year_tokens.to_string(),
            three_year_tokens: sku.pricing.three_year_tokens.to_string(),
            features: sku.features.clone(),
            popular: sku.popular,
            status: sku.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Добавить фичу (пустые после trim игнорируются)
    pub fn add_feature(&mut self, feature: &str) {
        let trimmed = feature.trim();
        if !trimmed.is_empty() {
            self.features.push(trimmed.to_string());
        }
    }

    /// Удалить фичу по индексу (за границей — no-op)
    pub fn remove_feature(&mut self, index: usize) {
        if index < self.features.len() {
            self.features.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("SKU ID is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Product name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_add_feature_trims_and_skips_blank() {
        let mut dto = SkuDto::default();
        dto.add_feature("  24/7 Support  ");
        dto.add_feature("   ");
        dto.add_feature("");
        assert_eq!(dto.features, vec!["24/7 Support".to_string()]);
    }

    #[test]
    fn dto_remove_feature_out_of_range_is_noop() {
        let mut dto = SkuDto::default();
        dto.add_feature("A");
        dto.remove_feature(5);
        assert_eq!(dto.features.len(), 1);
        dto.remove_feature(0);
        assert!(dto.features.is_empty());
    }

    #[test]
    fn dto_feature_order_is_preserved_and_duplicates_allowed() {
        let mut dto = SkuDto::default();
        dto.add_feature("Analytics");
        dto.add_feature("Storage");
        dto.add_feature("Analytics");
        assert_eq!(dto.features, vec!["Analytics", "Storage", "Analytics"]);
    }

    #[test]
    fn pricing_zero_means_not_offered() {
        let pricing = TokenPricing::new(272, 0, 0, 0);
        assert!(pricing.is_offered(PricingPlan::PayPerUse));
        assert!(!pricing.is_offered(PricingPlan::Monthly));
        assert_eq!(pricing.tokens_for(PricingPlan::PayPerUse), 272);
    }

    #[test]
    fn sku_serializes_with_camel_case_wire_names() {
        let mut sku = Sku::new_for_insert("M10001".into(), "Core".into(), "Full text".into());
        sku.pricing = TokenPricing::new(144, 26352, 21082, 15811);
        let json = serde_json::to_value(&sku).unwrap();
        assert_eq!(json["code"], "M10001");
        assert_eq!(json["description"], "Core");
        assert_eq!(json["fullDescription"], "Full text");
        assert_eq!(json["pricing"]["ppuTokens"], 144);
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn dto_validate_requires_code_and_name() {
        let mut dto = SkuDto::default();
        dto.name = "Core".into();
        assert!(dto.validate().is_err());

        dto.code = "M10001".into();
        dto.name = "  ".into();
        assert!(dto.validate().is_err());

        dto.name = "Core".into();
        assert!(dto.validate().is_ok());
    }
}
