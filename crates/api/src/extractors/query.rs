//! Query string extractor that tolerates repeated keys.
//!
//! axum's `Query` fails on `?artist=a&artist=b`. Dashboards and hand-written links
//! produce such URLs, so the first value of each key wins instead.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Deserializes the query string into `T`, keeping the first value of repeated keys.
#[derive(Debug, Clone, Default)]
pub struct FirstValueQuery<T>(pub T);

/// Collapses query pairs into an object, keeping the first value per key.
fn first_values(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.entry(key).or_insert(Value::String(value));
    }
    map
}

#[async_trait]
impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        serde_json::from_value(Value::Object(first_values(pairs)))
            .map(FirstValueQuery)
            .map_err(|e| ApiError::Validation(format!("Invalid query string: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use domain::models::{Artist, ArtistRef, SalesQuery};

    async fn extract(uri: &str) -> Result<SalesQuery, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        FirstValueQuery::<SalesQuery>::from_request_parts(&mut parts, &())
            .await
            .map(|FirstValueQuery(query)| query)
    }

    #[test]
    fn test_first_values_keeps_first_occurrence() {
        let map = first_values(vec![
            ("artist".into(), "artist2".into()),
            ("campaign".into(), "all".into()),
            ("artist".into(), "artist1".into()),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["artist"], "artist2");
    }

    #[tokio::test]
    async fn test_repeated_key_uses_first_value() {
        let query = extract("/api/metrics/sales?artist=artist2&artist=artist1")
            .await
            .unwrap();
        assert_eq!(query.artist(), ArtistRef::Known(Artist::EchoRivers));
    }

    #[tokio::test]
    async fn test_missing_query_string() {
        let query = extract("/api/metrics/sales").await.unwrap();
        assert_eq!(query.artist, None);
        assert_eq!(query.campaign, None);
    }

    #[tokio::test]
    async fn test_unrelated_keys_are_ignored() {
        let query = extract("/api/metrics/sales?utm_source=mail&campaign=sales3")
            .await
            .unwrap();
        assert_eq!(query.campaign.as_deref(), Some("sales3"));
    }
}
