//! SKU Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management over the catalog context
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SkuDetails;
pub use view_model::SkuDetailsViewModel;
