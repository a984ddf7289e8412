pub mod aggregate;

pub use aggregate::{PricingPlan, Sku, SkuDto, SkuId, SkuStatus, TokenPricing};
