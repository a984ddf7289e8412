//! Посевные данные каталога.
//!
//! Единственная копия мок-набора: страницы получают её через общий
//! `CatalogService`, а не дублируют массивы по месту.

use crate::domain::a001_sku::{Sku, SkuStatus, TokenPricing};
use crate::domain::a002_category::Category;

fn sku(
    code: &str,
    name: &str,
    full_description: &str,
    category: &str,
    pricing: TokenPricing,
    features: &[&str],
    popular: bool,
    status: SkuStatus,
) -> Sku {
    let mut item = Sku::new_for_insert(code.into(), name.into(), full_description.into());
    item.category = category.into();
    item.pricing = pricing;
    item.features = features.iter().map(|f| f.to_string()).collect();
    item.popular = popular;
    item.status = status;
    item
}

/// Шесть посевных SKU
pub fn seed_skus() -> Vec<Sku> {
    vec![
        sku(
            "M10001",
            "Producer Micro APP Core",
            "Essential microservice core with input, output, bandwidth and storage capabilities",
            "Core Services",
            TokenPricing::new(144, 26352, 21082, 15811),
            &[
                "Input/Output Processing",
                "Bandwidth Management",
                "Storage Included",
                "24/7 Support",
            ],
            false,
            SkuStatus::Active,
        ),
        sku(
            "M10002",
            "Remote Commentator",
            "Advanced remote commentary service requiring Producer Core integration",
            "Communication",
            TokenPricing::new(144, 26352, 21082, 15811),
            &[
                "Real-time Commentary",
                "Producer Core Required",
                "Multi-language Support",
                "Analytics Dashboard",
            ],
            true,
            SkuStatus::Active,
        ),
        sku(
            "M10003",
            "Popup Channel",
            "Flexible popup channel service excluding input, output, bandwidth and storage",
            "Channels",
            TokenPricing::new(272, 0, 0, 0),
            &[
                "Pay-per-use Only",
                "Instant Deployment",
                "Custom Branding",
                "Basic Analytics",
            ],
            false,
            SkuStatus::Active,
        ),
        sku(
            "M10004",
            "Premium Channel",
            "Full-featured channel with comprehensive input, output, bandwidth and storage",
            "Channels",
            TokenPricing::new(0, 11904, 11904, 11904),
            &[
                "Full I/O Support",
                "Unlimited Storage",
                "Priority Support",
                "Advanced Analytics",
            ],
            true,
            SkuStatus::Active,
        ),
        sku(
            "M10005",
            "TVU Grid Subscription",
            "Professional grid subscription with one output for unlimited use",
            "Professional",
            TokenPricing::new(0, 0, 5208, 4687),
            &[
                "One Output Channel",
                "Unlimited Usage",
                "Grid Interface",
                "Professional Support",
            ],
            false,
            SkuStatus::Active,
        ),
        sku(
            "S00001",
            "Advanced User Subscription",
            "Premium subscription for advanced users with enhanced capabilities",
            "Subscriptions",
            TokenPricing::new(0, 0, 0, 0),
            &[
                "Enhanced Features",
                "Priority Access",
                "Advanced Tools",
                "Dedicated Support",
            ],
            false,
            SkuStatus::Inactive,
        ),
    ]
}

/// Пять посевных категорий
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new_for_insert(
            "C001".into(),
            "Core Services".into(),
            Some("Essential core services and infrastructure".into()),
        ),
        Category::new_for_insert(
            "C002".into(),
            "Communication".into(),
            Some("Communication and collaboration tools".into()),
        ),
        Category::new_for_insert(
            "C003".into(),
            "Channels".into(),
            Some("Various channel types and configurations".into()),
        ),
        Category::new_for_insert(
            "C004".into(),
            "Professional".into(),
            Some("Professional-grade solutions".into()),
        ),
        Category::new_for_insert(
            "C005".into(),
            "Subscriptions".into(),
            Some("User subscription services".into()),
        ),
    ]
}
