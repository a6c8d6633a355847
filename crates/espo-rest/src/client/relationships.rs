//! Related-record listing and link management.

use bytes::Bytes;
use serde::Serialize;
use tracing::instrument;

use espocrm_client::{RequestBuilder, RequestMethod};

use crate::error::Result;
use crate::parameters::{encode_query, Parameters};

/// Body of link and unlink requests.
#[derive(Debug, Serialize)]
struct LinkPayload<'a> {
    ids: Vec<&'a str>,
}

impl<'a> LinkPayload<'a> {
    fn new(ids: &'a [impl AsRef<str>]) -> Self {
        Self {
            ids: ids.iter().map(AsRef::as_ref).collect(),
        }
    }
}

impl super::EspoRestClient {
    /// `GET /{entity_type}/{id}/{related_entity}?{params}`
    pub fn build_list_related(
        &self,
        entity_type: &str,
        id: &str,
        related_entity: &str,
        params: Option<&Parameters>,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Get, &[entity_type, id, related_entity])?
            .query_pairs(encode_query(params)))
    }

    /// List records related to `id` through the `related_entity` link.
    #[instrument(skip(self, params))]
    pub async fn list_related(
        &self,
        entity_type: &str,
        id: &str,
        related_entity: &str,
        params: Option<&Parameters>,
    ) -> Result<Bytes> {
        let request = self.build_list_related(entity_type, id, related_entity, params)?;
        self.execute(request).await
    }

    /// `POST /{entity_type}/{id}/{link}` with body `{"ids": [...]}`.
    pub fn build_link(
        &self,
        entity_type: &str,
        id: &str,
        link: &str,
        ids: &[impl AsRef<str>],
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Post, &[entity_type, id, link])?
            .json(&LinkPayload::new(ids))?)
    }

    /// Relate the records in `ids` to `id` through `link`.
    ///
    /// `ids` may be empty; the server decides what that means.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn link(
        &self,
        entity_type: &str,
        id: &str,
        link: &str,
        ids: &[impl AsRef<str>],
    ) -> Result<Bytes> {
        let request = self.build_link(entity_type, id, link, ids)?;
        self.execute(request).await
    }

    /// `DELETE /{entity_type}/{id}/{link}` with body `{"ids": [...]}`.
    pub fn build_unlink(
        &self,
        entity_type: &str,
        id: &str,
        link: &str,
        ids: &[impl AsRef<str>],
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(RequestMethod::Delete, &[entity_type, id, link])?
            .json(&LinkPayload::new(ids))?)
    }

    /// Remove the relation between `id` and each record in `ids`.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn unlink(
        &self,
        entity_type: &str,
        id: &str,
        link: &str,
        ids: &[impl AsRef<str>],
    ) -> Result<Bytes> {
        let request = self.build_unlink(entity_type, id, link, ids)?;
        self.execute(request).await
    }
}
