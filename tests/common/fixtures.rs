use lead_gateway::core::lead::{LandingPage, Lead};
use lead_gateway_primitives::field::{FieldValue, FieldValues};

/// The key of the active configuration in most tests.
pub const SAMPLE_API_KEY: &str = "secret123";

pub fn sample_landing_page() -> LandingPage {
    LandingPage::new("P1".to_string(), "Launch".to_string(), "launch".to_string())
}

pub fn sample_data() -> FieldValues {
    let mut data = FieldValues::new();
    data.insert("name".to_string(), FieldValue::from("Ana"));
    data.insert("phone".to_string(), FieldValue::from("+5511999999999"));
    data
}

/// Lead `L1` submitted to the [`sample_landing_page`].
pub fn sample_lead() -> Lead {
    Lead {
        id: "L1".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        landing_page_id: "P1".to_string(),
        landing_page: None,
        data: sample_data(),
    }
}

/// Form values of every primitive type, as the landing page stored them.
pub fn typed_data() -> serde_json::Value {
    serde_json::json!({
        "name": "Ana",
        "age": 31,
        "score": -7,
        "ratio": 19.9,
        "customer_id": 9_007_199_254_740_993_u64,
        "subscribed": true,
        "vip": false,
        "company": null
    })
}

/// Lead `L2`, with [`typed_data`], submitted to the [`sample_landing_page`].
pub fn lead_with_typed_data() -> Lead {
    Lead {
        id: "L2".to_string(),
        data: serde_json::from_value(typed_data()).unwrap(),
        ..sample_lead()
    }
}
