//! Record CRUD and list operations.

use bytes::Bytes;
use tracing::instrument;

use espocrm_client::{RequestBuilder, RequestMethod};

use crate::error::Result;
use crate::parameters::{encode_query, Parameters};

impl super::EspoRestClient {
    /// `GET /{entity_type}/{id}`
    pub fn build_read(&self, entity_type: &str, id: &str) -> Result<RequestBuilder> {
        self.request(RequestMethod::Get, &[entity_type, id])
    }

    /// Fetch one record.
    #[instrument(skip(self))]
    pub async fn read(&self, entity_type: &str, id: &str) -> Result<Bytes> {
        let request = self.build_read(entity_type, id)?;
        self.execute(request).await
    }

    /// `DELETE /{entity_type}/{id}`
    pub fn build_delete(&self, entity_type: &str, id: &str) -> Result<RequestBuilder> {
        self.request(RequestMethod::Delete, &[entity_type, id])
    }

    /// Delete one record.
    #[instrument(skip(self))]
    pub async fn delete(&self, entity_type: &str, id: &str) -> Result<Bytes> {
        let request = self.build_delete(entity_type, id)?;
        self.execute(request).await
    }

    /// `GET /{entity_type}?{params}`
    pub fn build_list(
        &self,
        entity_type: &str,
        params: Option<&Parameters>,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Get, &[entity_type])?
            .query_pairs(encode_query(params)))
    }

    /// List records, optionally filtered, sorted and paginated.
    #[instrument(skip(self, params))]
    pub async fn list(&self, entity_type: &str, params: Option<&Parameters>) -> Result<Bytes> {
        let request = self.build_list(entity_type, params)?;
        self.execute(request).await
    }

    /// `POST /{entity_type}` with the payload as the body.
    pub fn build_create(
        &self,
        entity_type: &str,
        payload: impl Into<Bytes>,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Post, &[entity_type])?
            .body(payload))
    }

    /// Create a record.
    ///
    /// `payload` is a JSON document sent exactly as given; it is not parsed
    /// or validated here.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, entity_type: &str, payload: impl Into<Bytes>) -> Result<Bytes> {
        let request = self.build_create(entity_type, payload)?;
        self.execute(request).await
    }

    /// `PUT /{entity_type}/{id}` with the payload as the body.
    pub fn build_update(
        &self,
        entity_type: &str,
        id: &str,
        payload: impl Into<Bytes>,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Put, &[entity_type, id])?
            .body(payload))
    }

    /// Update a record with the attributes in `payload`, sent as given.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        entity_type: &str,
        id: &str,
        payload: impl Into<Bytes>,
    ) -> Result<Bytes> {
        let request = self.build_update(entity_type, id, payload)?;
        self.execute(request).await
    }
}
