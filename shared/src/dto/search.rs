use serde::{Deserialize, Serialize};

use super::shop::Shop;

/// Restaurant search request from the client.
///
/// Every field is optional; pagination fields default to zero on the wire and
/// are replaced with start=1 / count=10 by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_codes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// 1-based offset into the result set.
    pub start: u32,
    /// Page size.
    pub count: u32,
}

/// Search result page returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub shops: Vec<Shop>,
    pub results_available: i64,
    pub results_returned: i64,
    pub results_start: i64,
}

/// Detail lookup response, one shop wrapped for the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopDetailResponse {
    pub shop: Shop,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_accepts_camel_case_fields() {
        let req: SearchRequest = serde_json::from_str(
            r#"{"keyword":"ramen","genreCodes":["G001","G013"],"radiusCode":"3","lat":35.68,"lng":139.76,"start":11,"count":20}"#,
        )
        .unwrap();

        assert_eq!(req.keyword.as_deref(), Some("ramen"));
        assert_eq!(req.genre_codes, vec!["G001", "G013"]);
        assert_eq!(req.radius_code.as_deref(), Some("3"));
        assert_eq!(req.lat, Some(35.68));
        assert_eq!(req.lng, Some(139.76));
        assert_eq!(req.start, 11);
        assert_eq!(req.count, 20);
    }

    #[test]
    fn search_request_defaults_missing_fields() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();

        assert!(req.keyword.is_none());
        assert!(req.genre_codes.is_empty());
        assert_eq!(req.start, 0);
        assert_eq!(req.count, 0);
    }

    #[test]
    fn search_response_uses_snake_case_counts() {
        let resp = SearchResponse {
            shops: vec![],
            results_available: 42,
            results_returned: 10,
            results_start: 1,
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["results_available"], 42);
        assert_eq!(json["results_returned"], 10);
        assert_eq!(json["results_start"], 1);
        assert!(json["shops"].as_array().unwrap().is_empty());
    }

    #[test]
    fn shop_tolerates_missing_vendor_fields() {
        let shop: Shop =
            serde_json::from_str(r#"{"id":"J001","name":"Izakaya Test"}"#).unwrap();

        assert_eq!(shop.id, "J001");
        assert_eq!(shop.name, "Izakaya Test");
        assert_eq!(shop.address, "");
        assert_eq!(shop.photo.pc.l, "");
        assert_eq!(shop.lat, 0.0);
    }
}
