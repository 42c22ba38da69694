use crate::http::{error_from_response, transport_error};
use crate::PortalClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;
use uuid::Uuid;

/// Record operations over one named collection.
///
/// The service exposes each collection as a REST resource supporting
/// equality-filtered selects with ordering, single-row inserts, and
/// by-id updates and deletes — exactly the surface the portal consumes.
pub struct Collection<'a> {
    client: &'a PortalClient,
    name: &'static str,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(client: &'a PortalClient, name: &'static str) -> Self {
        Self { client, name }
    }

    /// Start a filtered, ordered select over this collection.
    pub fn select(self) -> SelectQuery<'a> {
        SelectQuery {
            collection: self,
            filters: Vec::new(),
            order: None,
        }
    }

    /// Insert one record. The service fills defaulted columns (id, status,
    /// timestamps); the caller sends only what it owns.
    pub async fn insert<T: Serialize>(&self, row: &T) -> Result<(), AppError> {
        let url = self.client.config().rest_url(self.name);
        let response = self
            .client
            .request(Method::POST, url)
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(collection = self.name, error = %err, "insert failed");
            return Err(err);
        }
        Ok(())
    }

    /// Update the record with the given id, writing only the fields present
    /// in `fields`.
    pub async fn update_by_id<T: Serialize>(&self, id: Uuid, fields: &T) -> Result<(), AppError> {
        let url = self.client.config().rest_url(self.name);
        let response = self
            .client
            .request(Method::PATCH, url)
            .query(&[("id", format!("eq.{id}"))])
            .json(fields)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(collection = self.name, %id, error = %err, "update failed");
            return Err(err);
        }
        Ok(())
    }

    /// Hard-delete the record with the given id.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        let url = self.client.config().rest_url(self.name);
        let response = self
            .client
            .request(Method::DELETE, url)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(collection = self.name, %id, error = %err, "delete failed");
            return Err(err);
        }
        Ok(())
    }
}

/// Builder for an equality-filtered select.
pub struct SelectQuery<'a> {
    collection: Collection<'a>,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl SelectQuery<'_> {
    /// Keep only rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order newest-first on the given column.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Fetch every matching row.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, AppError> {
        let name = self.collection.name;
        let url = self.collection.client.config().rest_url(name);
        let mut params = self.filters;
        if let Some(order) = self.order {
            params.push(("order".to_string(), order));
        }

        let response = self
            .collection
            .client
            .request(Method::GET, url)
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::warn!(collection = name, error = %err, "select failed");
            return Err(err);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::service(format!("malformed rows from {name}: {e}")))
    }

    /// Fetch at most one matching row: `None` for zero rows, an error when
    /// the filter unexpectedly matches more than one.
    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, AppError> {
        let name = self.collection.name;
        let mut rows: Vec<T> = self.fetch().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(Some(rows.remove(0))),
            n => Err(AppError::service(format!(
                "expected at most one row from {name}, got {n}"
            ))),
        }
    }
}
