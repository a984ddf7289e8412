//! Модель запросов каталога: фильтрация SKU и вывод списка категорий.
//!
//! Чистые функции без состояния; порядок результата всегда совпадает с
//! порядком входа (никакого ранжирования).

use crate::domain::a001_sku::Sku;
use serde::{Deserialize, Serialize};

/// Сентинел "все категории"
pub const ALL_CATEGORIES: &str = "All";

/// Фильтр по категории
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Точное (регистрозависимое) совпадение с `sku.category`
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, sku: &Sku) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => &sku.category == name,
        }
    }
}

/// Комбинированный фильтр списка SKU
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuFilter {
    /// Поисковая строка; пустая — совпадает со всем
    pub search: String,
    pub category: CategoryFilter,
}

impl SkuFilter {
    pub fn new(search: &str, category: CategoryFilter) -> Self {
        Self {
            search: search.to_string(),
            category,
        }
    }

    /// SKU проходит, если совпал и поиск, и категория (логическое И)
    pub fn matches(&self, sku: &Sku) -> bool {
        self.matches_search(sku) && self.category.matches(sku)
    }

    /// Поиск: регистронезависимая подстрока в названии, описании или коде
    fn matches_search(&self, sku: &Sku) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        sku.base.description.to_lowercase().contains(&needle)
            || sku.full_description.to_lowercase().contains(&needle)
            || sku.base.code.to_lowercase().contains(&needle)
    }
}

/// Отфильтровать SKU, сохраняя исходный относительный порядок
pub fn filter_skus(skus: &[Sku], filter: &SkuFilter) -> Vec<Sku> {
    skus.iter()
        .filter(|sku| filter.matches(sku))
        .cloned()
        .collect()
}

/// Список категорий для панели фильтров: "All" + различные значения
/// `category` в порядке первого появления, без дублей
pub fn derive_categories(skus: &[Sku]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for sku in skus {
        if !categories.contains(&sku.category) {
            categories.push(sku.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_skus;

    fn codes(skus: &[Sku]) -> Vec<&str> {
        skus.iter().map(|s| s.base.code.as_str()).collect()
    }

    #[test]
    fn search_channel_matches_both_channel_skus_in_order() {
        let skus = seed_skus();
        let filter = SkuFilter::new("channel", CategoryFilter::All);
        let result = filter_skus(&skus, &filter);
        assert_eq!(codes(&result), vec!["M10003", "M10004"]);
    }

    #[test]
    fn category_only_filter_equals_empty_search() {
        let skus = seed_skus();
        let filter = SkuFilter::new("", CategoryFilter::Only("Channels".into()));
        let result = filter_skus(&skus, &filter);
        assert_eq!(codes(&result), vec!["M10003", "M10004"]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let skus = seed_skus();
        let filter = SkuFilter::new("zzz", CategoryFilter::All);
        assert!(filter_skus(&skus, &filter).is_empty());
    }

    #[test]
    fn empty_search_with_all_returns_everything() {
        let skus = seed_skus();
        let filter = SkuFilter::default();
        assert_eq!(filter_skus(&skus, &filter).len(), skus.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let skus = seed_skus();
        let lower = filter_skus(&skus, &SkuFilter::new("producer", CategoryFilter::All));
        let upper = filter_skus(&skus, &SkuFilter::new("PRODUCER", CategoryFilter::All));
        assert_eq!(codes(&lower), codes(&upper));
        assert!(!lower.is_empty());
    }

    #[test]
    fn search_matches_business_code_substring() {
        let skus = seed_skus();
        let result = filter_skus(&skus, &SkuFilter::new("s000", CategoryFilter::All));
        assert_eq!(codes(&result), vec!["S00001"]);
    }

    #[test]
    fn search_matches_full_description() {
        let skus = seed_skus();
        // "microservice" встречается только в описании M10001
        let result = filter_skus(&skus, &SkuFilter::new("microservice", CategoryFilter::All));
        assert_eq!(codes(&result), vec!["M10001"]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let skus = seed_skus();
        let filter = SkuFilter::new("", CategoryFilter::Only("channels".into()));
        assert!(filter_skus(&skus, &filter).is_empty());
    }

    #[test]
    fn both_predicates_combine_with_and() {
        let skus = seed_skus();
        let filter = SkuFilter::new("premium", CategoryFilter::Only("Channels".into()));
        assert_eq!(codes(&filter_skus(&skus, &filter)), vec!["M10004"]);

        // Поиск совпадает, категория — нет
        let filter = SkuFilter::new("premium", CategoryFilter::Only("Core Services".into()));
        assert!(filter_skus(&skus, &filter).is_empty());
    }

    #[test]
    fn derive_categories_starts_with_all_in_first_seen_order() {
        let skus = seed_skus();
        assert_eq!(
            derive_categories(&skus),
            vec![
                "All",
                "Core Services",
                "Communication",
                "Channels",
                "Professional",
                "Subscriptions"
            ]
        );
    }

    #[test]
    fn derive_categories_on_empty_set_is_just_all() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn category_filter_label_round_trip() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Channels"),
            CategoryFilter::Only("Channels".into())
        );
        assert_eq!(CategoryFilter::Only("Channels".into()).label(), "Channels");
    }
}
