//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a001_sku::Sku;
use contracts::domain::a002_category::Category;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для агрегатов берёт `list_name` из contracts; остальное — хардкод.
/// Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "c100_catalog" => "Catalog",
        "d200_admin_dashboard" => "Dashboard",
        "a001_sku" => Sku::list_name(),
        "a001_sku_new" => "New SKU",
        "a002_category" => Category::list_name(),
        k if k.starts_with("a001_sku_detail_") => "Edit SKU",
        _ => "Unknown",
    }
}

/// Заголовок detail-вкладки с бизнес-кодом SKU.
///
/// Вкладка, восстановленная из URL, открывается с общим заголовком из
/// `tab_label_for_key`; после загрузки агрегата заголовок уточняется
/// через `AppGlobalContext::update_tab_title`.
pub fn sku_detail_tab_title(code: &str) -> String {
    format!("Edit {}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_keys_get_generic_label_until_loaded() {
        assert_eq!(
            tab_label_for_key("a001_sku_detail_4cf9f9e0-0000-0000-0000-000000000000"),
            "Edit SKU"
        );
    }

    #[test]
    fn detail_tab_title_carries_business_code() {
        assert_eq!(sku_detail_tab_title("M10001"), "Edit M10001");
    }
}
