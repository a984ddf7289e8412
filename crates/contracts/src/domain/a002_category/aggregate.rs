use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория — свободная метка для группировки SKU.
///
/// Название живёт в `base.description`, текстовое описание — в `base.comment`.
/// Количество SKU НЕ хранится: каталог считает его по живому набору SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,
}

impl Category {
    pub fn new_for_insert(code: String, name: String, description: Option<String>) -> Self {
        let mut base = BaseAggregate::new(CategoryId::new_v4(), code, name);
        base.comment = description;
        Self { base }
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Read model
// ============================================================================

/// Строка списка категорий с посчитанным количеством SKU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "skuCount")]
    pub sku_count: usize,
}

impl CategoryRow {
    pub fn from_aggregate(category: &Category, sku_count: usize) -> Self {
        Self {
            id: category.to_string_id(),
            code: category.base.code.clone(),
            name: category.base.description.clone(),
            description: category.base.comment.clone().unwrap_or_default(),
            sku_count,
        }
    }
}
