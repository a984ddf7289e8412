pub mod page;
pub mod registry;
pub mod tab_labels;

pub use tab_labels::{sku_detail_tab_title, tab_label_for_key};
