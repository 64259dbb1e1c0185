//! Generic CRUD Operations
//!
//! One implementation of the list/get/create/update/partial-update/delete
//! contract, instantiated per entity through the `Entity` trait.

use serde::de::DeserializeOwned;

use crate::models::Entity;

use super::{ApiError, ListQuery};

/// GET the collection resource.
pub async fn list<T: Entity>(query: &ListQuery) -> Result<Vec<T>, ApiError> {
    let url = absolute(&collection_path::<T>(query, js_sys::Date::now() as u64));
    decode(reqwest::Client::new().get(url).send().await).await
}

/// GET a single entity by id.
pub async fn get<T: Entity>(id: i64) -> Result<T, ApiError> {
    let url = absolute(&member_path::<T>(id));
    decode(reqwest::Client::new().get(url).send().await).await
}

/// POST a new entity. The body carries no id; the server assigns one.
pub async fn create<T: Entity>(entity: &T) -> Result<T, ApiError> {
    let url = absolute(T::RESOURCE);
    decode(reqwest::Client::new().post(url).json(entity).send().await).await
}

/// PUT a full replacement of an existing entity.
pub async fn update<T: Entity>(entity: &T) -> Result<T, ApiError> {
    let id = entity.id().ok_or(ApiError::MissingId)?;
    let url = absolute(&member_path::<T>(id));
    decode(reqwest::Client::new().put(url).json(entity).send().await).await
}

/// PATCH the set fields of an existing entity. Unset fields stay off the wire,
/// so the body is a merge-patch document.
pub async fn partial_update<T: Entity>(entity: &T) -> Result<T, ApiError> {
    let id = entity.id().ok_or(ApiError::MissingId)?;
    let url = absolute(&member_path::<T>(id));
    decode(reqwest::Client::new().patch(url).json(entity).send().await).await
}

/// DELETE an entity by id. The response body is ignored.
pub async fn delete<T: Entity>(id: i64) -> Result<(), ApiError> {
    let url = absolute(&member_path::<T>(id));
    let response = reqwest::Client::new()
        .delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

// ========================
// URL building
// ========================

/// Collection path with query string. The cache buster defeats HTTP caching on
/// every list request; page/size/sort are forwarded only when set.
fn collection_path<T: Entity>(query: &ListQuery, cache_buster: u64) -> String {
    let mut params = Vec::new();
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    if let Some(size) = query.size {
        params.push(format!("size={size}"));
    }
    if let Some(sort) = &query.sort {
        params.push(format!("sort={sort}"));
    }
    params.push(format!("cacheBuster={cache_buster}"));
    format!("{}?{}", T::RESOURCE, params.join("&"))
}

fn member_path<T: Entity>(id: i64) -> String {
    format!("{}/{}", T::RESOURCE, id)
}

/// reqwest on wasm accepts only absolute URLs, so resolve paths against the
/// origin the page was served from.
fn absolute(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/{path}")
}

// ========================
// Response handling
// ========================

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(
    result: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ApiError> {
    let response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, Dealer};

    #[test]
    fn test_collection_path_appends_cache_buster() {
        let path = collection_path::<Car>(&ListQuery::default(), 1234);
        assert_eq!(path, "services/carsapp/api/cars?cacheBuster=1234");
    }

    #[test]
    fn test_collection_path_forwards_pagination() {
        let query = ListQuery {
            page: Some(2),
            size: Some(20),
            sort: Some("id,asc".to_string()),
        };
        let path = collection_path::<Dealer>(&query, 99);
        assert_eq!(
            path,
            "services/dealersapp/api/dealers?page=2&size=20&sort=id,asc&cacheBuster=99"
        );
    }

    #[test]
    fn test_member_path() {
        assert_eq!(member_path::<Car>(7), "services/carsapp/api/cars/7");
    }
}
