use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub mod fixtures;

pub const SEARCH_OPERATION: &str = "SearchRentalsFederated";
pub const DETAILS_OPERATION: &str = "RentalListingDetailsFederated";

const DEFAULT_PER_PAGE: usize = 20;

/// A request as the server saw it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub headers: BTreeMap<String, String>,
    pub body: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Option<Value>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    listings: Arc<HashMap<String, Value>>,
    edges: Arc<Vec<fixtures::SeededEdge>>,
    journal: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl AppState {
    pub fn seeded() -> Self {
        let listings = fixtures::listing_details()
            .into_iter()
            .collect::<HashMap<_, _>>();
        Self {
            listings: Arc::new(listings),
            edges: Arc::new(fixtures::search_edges()),
            journal: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/", post(graphql))
        .route("/graphql", post(graphql))
        .route("/_journal", get(journal))
        .with_state(AppState::seeded())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn journal(State(state): State<AppState>) -> Json<Vec<RecordedRequest>> {
    Json(state.journal.read().await.clone())
}

async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.journal.write().await.push(RecordedRequest {
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect(),
        body: body.clone(),
    });

    let request: GraphqlRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(err) => return graphql_error(StatusCode::BAD_REQUEST, &err.to_string(), None),
    };
    let variables = request.variables.clone().unwrap_or(Value::Null);
    let operation = operation_name(&request).unwrap_or_default();
    tracing::info!(operation = %operation, "handling GraphQL request");

    match operation.as_str() {
        SEARCH_OPERATION => search_rentals(&state, &variables),
        DETAILS_OPERATION => listing_details(&state, &variables),
        _ => graphql_error(StatusCode::BAD_REQUEST, "unknown operation", None),
    }
}

/// The explicit `operationName`, or the name after `query` in the document.
fn operation_name(request: &GraphqlRequest) -> Option<String> {
    if let Some(name) = &request.operation_name {
        return Some(name.clone());
    }
    let rest = request.query.trim_start().strip_prefix("query")?;
    let name: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    (!name.is_empty()).then_some(name)
}

fn search_rentals(state: &AppState, variables: &Value) -> (StatusCode, Json<Value>) {
    let input = &variables["input"];
    let filters = &input["filters"];
    if !filters.is_object() {
        return graphql_error(
            StatusCode::BAD_REQUEST,
            "invalid type for variable: 'input'",
            Some(json!({ "name": "input", "code": "VALIDATION_INVALID_TYPE_VARIABLE" })),
        );
    }

    let areas: Vec<u64> = filters["areas"]
        .as_array()
        .map(|areas| areas.iter().filter_map(Value::as_u64).collect())
        .unwrap_or_default();
    let lower = filters["price"]["lowerBound"].as_f64();
    let upper = filters["price"]["upperBound"].as_f64();

    let matches: Vec<&Value> = state
        .edges
        .iter()
        .filter(|seeded| areas.is_empty() || areas.iter().any(|area| area_contains(*area, seeded.area)))
        .filter(|seeded| {
            let price = seeded.edge["node"]["price"].as_f64().unwrap_or_default();
            lower.map_or(true, |lower| price >= lower) && upper.map_or(true, |upper| price <= upper)
        })
        .map(|seeded| &seeded.edge)
        .collect();

    let per_page = input["perPage"].as_u64().map_or(DEFAULT_PER_PAGE, |n| n as usize);
    let page = input["page"].as_u64().map_or(1, |n| n as usize);
    let edges: Vec<Value> = matches
        .iter()
        .skip(page.saturating_sub(1).saturating_mul(per_page))
        .take(per_page)
        .map(|edge| (*edge).clone())
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "data": {
                "searchRentals": {
                    "__typename": "SearchRentalsResponse",
                    "edges": edges,
                    "totalCount": matches.len()
                }
            }
        })),
    )
}

/// `1` covers everything, a borough code (multiple of 100) covers its
/// neighborhoods, anything else matches exactly.
fn area_contains(filter: u64, area: u64) -> bool {
    filter == 1 || filter == area || (filter % 100 == 0 && area / 100 == filter / 100)
}

fn listing_details(state: &AppState, variables: &Value) -> (StatusCode, Json<Value>) {
    let Some(id) = variables["listingID"].as_str() else {
        return graphql_error(
            StatusCode::BAD_REQUEST,
            "invalid type for variable: 'listingID'",
            Some(json!({ "name": "listingID", "code": "VALIDATION_INVALID_TYPE_VARIABLE" })),
        );
    };

    match state.listings.get(id) {
        Some(details) => (StatusCode::OK, Json(json!({ "data": details }))),
        None => (
            StatusCode::OK,
            Json(json!({
                "data": {
                    "rentalByListingId": null,
                    "buildingByRentalListingId": null,
                    "getBuildingExpressByRentalListingId": null,
                    "getRelloRentalById": null,
                    "getRentalListingExpressById": null
                },
                "errors": [{
                    "message": format!("rental listing {id} not found"),
                    "path": ["rentalByListingId"]
                }]
            })),
        ),
    }
}

fn graphql_error(status: StatusCode, message: &str, extensions: Option<Value>) -> (StatusCode, Json<Value>) {
    let mut error = json!({ "message": message });
    if let Some(extensions) = extensions {
        error["extensions"] = extensions;
    }
    (status, Json(json!({ "errors": [error] })))
}
