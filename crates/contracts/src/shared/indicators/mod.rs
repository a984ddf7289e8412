use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_format_serializes_with_kind_tag() {
        let json = serde_json::to_value(ValueFormat::Number { decimals: 1 }).unwrap();
        assert_eq!(json["kind"], "Number");
        assert_eq!(json["decimals"], 1);

        let json = serde_json::to_value(ValueFormat::Integer).unwrap();
        assert_eq!(json["kind"], "Integer");
    }

    #[test]
    fn indicator_meta_round_trips_by_id() {
        let meta = IndicatorMeta {
            id: IndicatorId::new("total_skus"),
            label: "Total SKUs".to_string(),
            icon: "package".to_string(),
            format: ValueFormat::Integer,
        };
        let text = serde_json::to_string(&meta).unwrap();
        let back: IndicatorMeta = serde_json::from_str(&text).unwrap();
        assert_eq!(back.id, meta.id);
    }
}
