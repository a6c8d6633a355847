use espocrm_api::EspoRestClient;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Read a required environment variable, panicking with a pointer to the
/// missing setting.
///
/// Integration tests must run against a real server; they fail rather than
/// skip when the environment is incomplete.
pub fn require_env(name: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        Ok(_) => panic!("{name} is set but empty; integration tests need a live EspoCRM instance"),
        Err(_) => panic!("{name} is not set; integration tests need a live EspoCRM instance"),
    }
}

/// Build a client from `ESPOCRM_URL` and the credential variables.
pub fn get_client() -> EspoRestClient {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });

    require_env("ESPOCRM_URL");
    EspoRestClient::from_env().expect("Failed to create client from environment")
}

/// The entity type and payloads driving the CRUD cycle.
pub struct EntityFixture {
    pub entity_type: String,
    pub create_payload: String,
    pub update_payload: String,
}

pub fn get_fixture() -> EntityFixture {
    EntityFixture {
        entity_type: require_env("ESPOCRM_ENTITY"),
        create_payload: require_env("ESPOCRM_CREATE_ENTITY_PAYLOAD"),
        update_payload: require_env("ESPOCRM_UPDATE_ENTITY_PAYLOAD"),
    }
}
