use serde::Deserialize;
use shared::Shop;

/// Top-level envelope of every gourmet API response.
#[derive(Debug, Clone, Deserialize)]
pub struct GourmetResponse {
    pub results: GourmetResults,
}

/// Result set inside a gourmet API response.
///
/// Everything is defaulted: when the vendor reports an error it sends only the
/// `error` array and omits the data fields entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GourmetResults {
    pub api_version: String,
    pub results_available: i64,
    /// Number of results in this page. The vendor transmits this as a string.
    pub results_returned: String,
    pub results_start: i64,
    #[serde(rename = "shop")]
    pub shops: Vec<Shop>,
    pub error: Option<Vec<GourmetError>>,
}

impl GourmetResults {
    /// `results_returned` parsed to an integer. Falls back to the shop-list
    /// length when the vendor sends something unparseable, or zero when the
    /// list is empty too.
    pub fn returned_count(&self) -> i64 {
        match self.results_returned.parse() {
            Ok(count) => count,
            Err(_) => {
                tracing::warn!(
                    value = %self.results_returned,
                    "results_returned is not numeric, falling back to shop count"
                );
                self.shops.len() as i64
            }
        }
    }
}

/// Error object the gourmet API embeds in an otherwise-200 response.
#[derive(Debug, Clone, Deserialize)]
pub struct GourmetError {
    pub code: i64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returned_count_parses_numeric_string() {
        let results: GourmetResults =
            serde_json::from_str(r#"{"results_returned":"5"}"#).unwrap();
        assert_eq!(results.returned_count(), 5);
    }

    #[test]
    fn returned_count_falls_back_to_shop_list_length() {
        let results: GourmetResults = serde_json::from_str(
            r#"{"results_returned":"abc","shop":[{"id":"a"},{"id":"b"},{"id":"c"}]}"#,
        )
        .unwrap();
        assert_eq!(results.returned_count(), 3);
    }

    #[test]
    fn returned_count_is_zero_without_shops() {
        let results: GourmetResults =
            serde_json::from_str(r#"{"results_returned":"abc"}"#).unwrap();
        assert_eq!(results.returned_count(), 0);
    }

    #[test]
    fn error_payload_decodes_without_data_fields() {
        let response: GourmetResponse = serde_json::from_str(
            r#"{"results":{"api_version":"1.26","error":[{"code":3000,"message":"invalid key"}]}}"#,
        )
        .unwrap();

        let errors = response.results.error.unwrap();
        assert_eq!(errors[0].code, 3000);
        assert_eq!(errors[0].message, "invalid key");
        assert!(response.results.shops.is_empty());
    }
}
