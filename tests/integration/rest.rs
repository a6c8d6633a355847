//! REST API integration tests against a live EspoCRM instance.

use super::common::{get_client, get_fixture};
use espocrm_api::{Credentials, EspoRestClient, FilterType, Parameters, Where};

fn record_id(body: &[u8]) -> String {
    let record: serde_json::Value =
        serde_json::from_slice(body).expect("Response should be a JSON object");
    record["id"]
        .as_str()
        .expect("Record should have an id")
        .to_string()
}

// ============================================================================
// REST API - CRUD cycle
// ============================================================================

#[tokio::test]
#[ignore = "requires a live EspoCRM instance"]
async fn test_rest_crud_cycle() {
    let client = get_client();
    let fixture = get_fixture();
    let entity = fixture.entity_type.as_str();

    let created = client
        .create(entity, fixture.create_payload.clone())
        .await
        .expect("create should succeed");
    let id = record_id(&created);

    let updated = client
        .update(entity, &id, fixture.update_payload.clone())
        .await
        .expect("update should succeed");
    assert_eq!(record_id(&updated), id, "update should return the same record");

    let read = client.read(entity, &id).await.expect("read should succeed");
    assert_eq!(record_id(&read), id);

    let params = Parameters::new()
        .max_size(1)
        .return_total(true)
        .where_condition(Where::new(FilterType::Equals, "id", id.as_str()));
    let listed = client
        .list(entity, Some(&params))
        .await
        .expect("list should succeed");
    let listed: serde_json::Value = serde_json::from_slice(&listed).unwrap();
    assert_eq!(listed["total"], 1, "filter by id should match exactly one record");
    assert_eq!(listed["list"][0]["id"], id.as_str());

    client.delete(entity, &id).await.expect("delete should succeed");

    let err = client
        .read(entity, &id)
        .await
        .expect_err("read after delete should fail");
    assert!(err.is_not_found(), "expected 404, got: {err}");
}

#[tokio::test]
#[ignore = "requires a live EspoCRM instance"]
async fn test_rest_list_without_params() {
    let client = get_client();
    let fixture = get_fixture();

    let body = client
        .list(&fixture.entity_type, None)
        .await
        .expect("list should succeed");
    let listed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(listed["list"].is_array());
}

#[tokio::test]
#[ignore = "requires a live EspoCRM instance"]
async fn test_rest_bad_api_key_is_rejected() {
    let url = super::common::require_env("ESPOCRM_URL");
    let fixture = get_fixture();
    let client = EspoRestClient::new(url, Credentials::api_key("definitely-not-a-key"))
        .expect("Failed to create client");

    let err = client
        .list(&fixture.entity_type, None)
        .await
        .expect_err("invalid key should be rejected");
    assert!(err.is_auth_error(), "expected 401/403, got: {err}");
}
