//! Форматирование токенов для таблиц цен

/// Маркер "план не предлагается" для нулевого количества токенов.
///
/// Исходные страницы показывали для нуля то "N/A", то "-" — здесь один
/// маркер на всё приложение.
pub const NOT_OFFERED: &str = "N/A";

/// Форматирует количество токенов: `0` → "N/A", иначе группировка
/// разрядов запятой ("26,352")
pub fn format_tokens(tokens: u32) -> String {
    if tokens == 0 {
        return NOT_OFFERED.to_string();
    }
    group_digits(tokens)
}

/// Вставляет запятую каждые 3 цифры с конца
fn group_digits(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_the_not_offered_marker() {
        assert_eq!(format_tokens(0), "N/A");
    }

    #[test]
    fn nonzero_values_are_comma_grouped() {
        assert_eq!(format_tokens(144), "144");
        assert_eq!(format_tokens(5208), "5,208");
        assert_eq!(format_tokens(26352), "26,352");
        assert_eq!(format_tokens(1234567), "1,234,567");
    }

    #[test]
    fn boundaries_around_grouping() {
        assert_eq!(format_tokens(999), "999");
        assert_eq!(format_tokens(1000), "1,000");
    }
}
