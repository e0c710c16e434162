//! Request handlers for the catalog API.
//!
//! Every parameter check that can fail returns a structured 422 through
//! [`crate::server::validation_response`] rather than a framework
//! rejection, so clients always see the same error body.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use emporium_core::{Error, Item, ModelName, Result};

use crate::api::{
    CreateItemResponse, ItemDetail, ItemPayload, ItemSummary, ListItemsResponse, ModelResponse,
    RootResponse, UpdateItemResponse, UserItemResponse, UserResponse,
};
use crate::server::{validation_response, AppState};

/// Inclusive bounds for readable item ids.
const ITEM_ID_MIN: u64 = 1;
/// Upper bound for readable item ids.
const ITEM_ID_MAX: u64 = 1000;
/// Minimum length for search query values.
const QUERY_MIN_LEN: usize = 3;
/// Fallback search terms when the client sends none.
const DEFAULT_ITEM_QUERY: [&str; 2] = ["foo", "bar"];
/// Default page size for the item listing.
const DEFAULT_PAGE_LIMIT: usize = 10;
/// Demo description attached to non-short item reads.
const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

// === Root ===

pub(crate) async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}

// === Items ===

pub(crate) async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ItemPayload>,
) -> Json<CreateItemResponse> {
    let request_id = format!("item-{}", uuid::Uuid::new_v4());

    let item: Item = payload.into();
    let price_with_tax = item.price_with_tax();
    let stored = state.store.insert(item);

    tracing::debug!(
        request_id = %request_id,
        id = stored.id,
        name = %stored.item.name,
        "Item created"
    );

    Json(CreateItemResponse {
        name: stored.item.name,
        description: stored.item.description,
        price: stored.item.price,
        tax: stored.item.tax,
        price_with_tax,
    })
}

/// Parsed query parameters for the item listing.
#[derive(Debug, PartialEq, Eq)]
struct ListQuery {
    skip: usize,
    limit: usize,
    q: Vec<String>,
}

impl ListQuery {
    /// Builds the listing parameters from raw query pairs.
    ///
    /// The search term key repeats (`item-query=foo&item-query=bar`), which
    /// a plain struct extractor cannot express, so the pairs are walked by
    /// hand. Unknown keys are ignored.
    fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut skip = 0;
        let mut limit = DEFAULT_PAGE_LIMIT;
        let mut q = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "skip" => skip = parse_index("skip", value)?,
                "limit" => limit = parse_index("limit", value)?,
                "item-query" => q.push(value.clone()),
                _ => {}
            }
        }

        if q.is_empty() {
            q = DEFAULT_ITEM_QUERY.iter().map(ToString::to_string).collect();
        }

        for value in &q {
            if value.chars().count() < QUERY_MIN_LEN {
                return Err(Error::validation(
                    "item-query",
                    format!("'{value}' is shorter than {QUERY_MIN_LEN} characters"),
                ));
            }
        }

        Ok(Self { skip, limit, q })
    }
}

pub(crate) async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = match ListQuery::from_pairs(&pairs) {
        Ok(query) => query,
        Err(err) => return validation_response(&err),
    };

    let items = state
        .store
        .page(query.skip, query.limit)
        .into_iter()
        .map(|stored| ItemSummary {
            item_name: stored.item.name,
        })
        .collect();

    Json(ListItemsResponse { items, q: query.q }).into_response()
}

/// Query parameters for a single-item read.
#[derive(Debug, Deserialize)]
pub(crate) struct ReadItemParams {
    #[serde(default)]
    needy: Option<String>,
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    short: bool,
}

pub(crate) async fn read_item(
    Path(item_id): Path<String>,
    Query(params): Query<ReadItemParams>,
) -> Response {
    let item_id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(err) => return validation_response(&err),
    };

    let Some(needy) = params.needy else {
        return validation_response(&Error::validation(
            "needy",
            "required query parameter is missing",
        ));
    };

    let q = match params.q {
        Some(q) if q.chars().count() >= QUERY_MIN_LEN => q,
        Some(q) => {
            return validation_response(&Error::validation(
                "q",
                format!("'{q}' is shorter than {QUERY_MIN_LEN} characters"),
            ));
        }
        None => {
            return validation_response(&Error::validation(
                "q",
                "required query parameter is missing",
            ));
        }
    };

    Json(ItemDetail {
        item_id,
        needy,
        q: Some(q),
        description: (!params.short).then(|| LONG_DESCRIPTION.to_string()),
    })
    .into_response()
}

/// Query parameters for an item update.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateItemParams {
    #[serde(default)]
    q: Option<String>,
}

pub(crate) async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Query(params): Query<UpdateItemParams>,
    Json(payload): Json<ItemPayload>,
) -> Response {
    let item_id = match parse_integer("item_id", &item_id) {
        Ok(id) => id,
        Err(err) => return validation_response(&err),
    };

    let stored = state.store.update(item_id, payload.into());

    tracing::debug!(id = item_id, name = %stored.item.name, "Item updated");

    Json(UpdateItemResponse {
        item_id,
        name: stored.item.name,
        description: stored.item.description,
        price: stored.item.price,
        tax: stored.item.tax,
        q: params.q,
    })
    .into_response()
}

// === Users ===

pub(crate) async fn read_user_me() -> Json<UserResponse> {
    Json(UserResponse {
        user_id: "the current user".to_string(),
    })
}

pub(crate) async fn read_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse { user_id })
}

/// Query parameters for a user-item read.
#[derive(Debug, Deserialize)]
pub(crate) struct UserItemParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    short: bool,
}

pub(crate) async fn read_user_item(
    Path((user_id, item_id)): Path<(String, String)>,
    Query(params): Query<UserItemParams>,
) -> Json<UserItemResponse> {
    Json(UserItemResponse {
        item_id,
        owner_id: user_id,
        q: params.q,
        description: (!params.short).then(|| LONG_DESCRIPTION.to_string()),
    })
}

// === Models ===

pub(crate) async fn get_model(Path(model_name): Path<String>) -> Response {
    match ModelName::from_str(&model_name) {
        Ok(model) => Json(ModelResponse {
            model_name: model,
            message: model.message().to_string(),
        })
        .into_response(),
        Err(err) => validation_response(&err),
    }
}

// === Parameter parsing ===

fn parse_integer(field: &'static str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| Error::validation(field, format!("'{value}' is not an integer")))
}

fn parse_index(field: &'static str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::validation(field, format!("'{value}' is not an integer")))
}

fn parse_item_id(value: &str) -> Result<u64> {
    let id = parse_integer("item_id", value)?;
    if !(ITEM_ID_MIN..=ITEM_ID_MAX).contains(&id) {
        return Err(Error::validation(
            "item_id",
            format!("{id} is not between {ITEM_ID_MIN} and {ITEM_ID_MAX}"),
        ));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListQuery::from_pairs(&[]).unwrap();

        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(query.q, vec!["foo", "bar"]);
    }

    #[test]
    fn test_list_query_repeated_search_terms() {
        let query = ListQuery::from_pairs(&pairs(&[
            ("skip", "1"),
            ("item-query", "widgets"),
            ("item-query", "gadgets"),
        ]))
        .unwrap();

        assert_eq!(query.skip, 1);
        assert_eq!(query.q, vec!["widgets", "gadgets"]);
    }

    #[test]
    fn test_list_query_rejects_short_terms() {
        let err = ListQuery::from_pairs(&pairs(&[("item-query", "ab")])).unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("item-query"));
    }

    #[test]
    fn test_list_query_rejects_bad_pagination() {
        let err = ListQuery::from_pairs(&pairs(&[("skip", "minus-one")])).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_list_query_ignores_unknown_keys() {
        let query = ListQuery::from_pairs(&pairs(&[("limit", "2"), ("verbose", "1")])).unwrap();
        assert_eq!(query.limit, 2);
    }

    #[test]
    fn test_parse_item_id_bounds() {
        assert_eq!(parse_item_id("1").unwrap(), 1);
        assert_eq!(parse_item_id("1000").unwrap(), 1000);
        assert!(parse_item_id("0").is_err());
        assert!(parse_item_id("1001").is_err());
        assert!(parse_item_id("seven").is_err());
    }
}
