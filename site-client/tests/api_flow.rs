//! Full client flow against the live mock server.
//!
//! Each test boots the mock server on a random port and exercises the
//! typed client over real HTTP, validating request building, envelope
//! decoding, auth side effects, and the resource layer end-to-end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared::ContactSubmission;
use site_client::resource::{ProjectsResource, ResourceState};
use site_client::services::api::content::ProjectFilters;
use site_client::{
    ApiClient, ApiError, ClientConfig, ContentApi, MemoryTokenStore, TokenStore,
};
use tokio::time::{timeout, Duration};

/// Boot the mock server on a random port and return the API base URL.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

fn client_at(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::new(base_url), Arc::new(MemoryTokenStore::new()))
}

/// Base URL that refuses connections immediately (nothing listens there).
const UNREACHABLE: &str = "http://127.0.0.1:9/api/v1";

/// Token store that counts writes and removals.
#[derive(Default)]
struct CountingStore {
    inner: MemoryTokenStore,
    stores: AtomicUsize,
    clears: AtomicUsize,
}

impl TokenStore for CountingStore {
    fn load(&self) -> Option<String> {
        self.inner.load()
    }

    fn store(&self, token: &str) {
        self.stores.fetch_add(1, Ordering::SeqCst);
        self.inner.store(token);
    }

    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear();
    }
}

#[tokio::test]
async fn every_listed_slug_resolves_to_its_project() {
    let base = start_server().await;
    let client = client_at(&base);

    let page = site_client::services::api::content::get_projects(
        &client,
        &ProjectFilters::default(),
    )
    .await
    .unwrap();

    assert!(page.success);
    assert!(!page.data.data.is_empty());
    assert_eq!(page.data.current_page, 1);

    for project in &page.data.data {
        let detail =
            site_client::services::api::content::get_project(&client, &project.slug)
                .await
                .unwrap();
        assert_eq!(detail.data.slug, project.slug);
    }
}

#[tokio::test]
async fn filters_narrow_the_listing() {
    let base = start_server().await;
    let client = client_at(&base);

    let agriculture = site_client::services::api::content::get_projects(
        &client,
        &ProjectFilters {
            category: Some("agriculture".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(!agriculture.data.data.is_empty());
    assert!(agriculture.data.data.iter().all(|p| {
        p.categories.iter().any(|c| c.slug == "agriculture")
    }));

    let searched = site_client::services::api::content::get_projects(
        &client,
        &ProjectFilters {
            search: Some("traffic".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(searched.data.data.len(), 1);
    assert_eq!(searched.data.data[0].slug, "metro-pulse");

    let year = site_client::services::api::content::get_projects(
        &client,
        &ProjectFilters {
            year: Some(2023),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(year.data.data.iter().all(|p| p.year == 2023));
}

#[tokio::test]
async fn pagination_envelope_is_respected() {
    let base = start_server().await;
    let client = client_at(&base);

    let page = site_client::services::api::content::get_projects(
        &client,
        &ProjectFilters {
            per_page: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .data;

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.last_page, 3);
    assert!(page.has_next_page());
}

#[tokio::test]
async fn unknown_slug_surfaces_the_servers_message() {
    let base = start_server().await;
    let client = client_at(&base);

    let err = site_client::services::api::content::get_project(&client, "no-such-project")
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Project not found");
        }
        other => panic!("expected HTTP 404, got {other:?}"),
    }
}

#[tokio::test]
async fn login_persists_the_token_exactly_once() {
    let base = start_server().await;
    let store = Arc::new(CountingStore::default());
    let client = ApiClient::new(ClientConfig::new(&base), store.clone());

    let session = site_client::services::api::auth::login(
        &client,
        mock_server::DEMO_EMAIL,
        mock_server::DEMO_PASSWORD,
    )
    .await
    .unwrap();

    assert!(!session.data.token.is_empty());
    assert_eq!(store.stores.load(Ordering::SeqCst), 1);
    assert_eq!(store.clears.load(Ordering::SeqCst), 0);
    assert_eq!(store.load().as_deref(), Some(session.data.token.as_str()));

    // The persisted token authenticates subsequent calls
    let user = site_client::services::api::auth::me(&client).await.unwrap();
    assert_eq!(user.data.email, mock_server::DEMO_EMAIL);
}

#[tokio::test]
async fn rejected_login_purges_any_stale_token() {
    let base = start_server().await;
    let store = Arc::new(MemoryTokenStore::with_token("stale-token"));
    let client = ApiClient::new(ClientConfig::new(&base), store.clone());

    let err = site_client::services::api::auth::login(
        &client,
        mock_server::DEMO_EMAIL,
        "wrong-password",
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::AuthExpired));
    assert!(store.load().is_none());
}

#[tokio::test]
async fn any_401_leaves_the_store_empty() {
    let base = start_server().await;
    let store = Arc::new(MemoryTokenStore::with_token("garbage"));
    let client = ApiClient::new(ClientConfig::new(&base), store.clone());

    let err = site_client::services::api::auth::me(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::AuthExpired));
    assert!(store.load().is_none());
}

#[tokio::test]
async fn logout_clears_locally_even_when_the_server_is_unreachable() {
    let store = Arc::new(CountingStore::default());
    store.store("soon-to-be-gone");
    store.stores.store(0, Ordering::SeqCst);

    let client = ApiClient::new(ClientConfig::new(UNREACHABLE), store.clone());
    let err = site_client::services::api::auth::logout(&client).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(store.clears.load(Ordering::SeqCst), 1);
    assert!(store.load().is_none());
}

#[tokio::test]
async fn logout_round_trip_invalidates_the_session() {
    let base = start_server().await;
    let store = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(ClientConfig::new(&base), store.clone());

    site_client::services::api::auth::login(
        &client,
        mock_server::DEMO_EMAIL,
        mock_server::DEMO_PASSWORD,
    )
    .await
    .unwrap();
    assert!(store.load().is_some());

    let response = site_client::services::api::auth::logout(&client).await.unwrap();
    assert!(response.success);
    assert!(store.load().is_none());

    let err = site_client::services::api::auth::me(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthExpired));
}

#[tokio::test]
async fn invalid_contact_email_never_reaches_the_network() {
    // The base URL refuses connections: if a request were attempted the
    // error would be Network, not Validation.
    let client = client_at(UNREACHABLE);

    let submission = ContactSubmission {
        name: "Ada".to_string(),
        email: "not-an-email".to_string(),
        company: None,
        subject: "Hello".to_string(),
        message: "A real message body.".to_string(),
        recaptcha_token: None,
    };

    let err = site_client::services::api::contact::submit_contact(&client, &submission)
        .await
        .unwrap_err();

    assert!(err.is_preflight(), "expected pre-flight rejection, got {err:?}");
}

#[tokio::test]
async fn valid_contact_submission_returns_a_reference_id() {
    let base = start_server().await;
    let client = client_at(&base);

    let submission = ContactSubmission {
        name: "Ada Okafor".to_string(),
        email: "ada@example.com".to_string(),
        company: Some("AgriCo".to_string()),
        subject: "Pilot program".to_string(),
        message: "We would like to trial the orchard drones.".to_string(),
        recaptcha_token: None,
    };

    let receipt = site_client::services::api::contact::submit_contact(&client, &submission)
        .await
        .unwrap();

    assert!(receipt.data.reference_id.starts_with("NV-"));
    assert!(!receipt.data.message.is_empty());
}

#[tokio::test]
async fn team_arrives_unsorted_and_the_helper_orders_it() {
    let base = start_server().await;
    let client = client_at(&base);

    let mut members = site_client::services::api::team::get_team_members(&client)
        .await
        .unwrap()
        .data;

    // Wire order is insertion order, not display order
    assert_ne!(members[0].order, 1);

    shared::utils::sort_by_display_order(&mut members);
    assert_eq!(members[0].name, "Marta Jensen");
    // Equal-order members keep their wire order
    let tied: Vec<_> = members
        .iter()
        .filter(|m| m.order == 3)
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(tied, ["Pieter Van Dam", "Lucia Ferreira"]);
}

#[tokio::test]
async fn stats_and_health_respond() {
    let base = start_server().await;
    let client = client_at(&base);

    let stats = site_client::services::api::stats::get_stats(&client).await.unwrap();
    assert_eq!(stats.data.total_projects, 5);

    let health = site_client::services::api::stats::health_check(&client)
        .await
        .unwrap();
    assert_eq!(health.data.status, "ok");
    assert!(!health.data.version.is_empty());
}

#[tokio::test]
async fn projects_resource_settles_on_fetched_data() {
    let base = start_server().await;
    let api: Arc<dyn ContentApi> = Arc::new(client_at(&base));
    let resource = ProjectsResource::new(api);

    let changes = resource.subscribe();
    resource.load(ProjectFilters {
        search: Some("harvest".to_string()),
        ..Default::default()
    });

    let page = loop {
        match resource.state() {
            ResourceState::Ready(page) => break page,
            ResourceState::Failed(error) => panic!("fetch failed: {error}"),
            _ => {
                timeout(Duration::from_secs(5), changes.recv())
                    .await
                    .expect("resource did not settle")
                    .expect("change channel closed");
            }
        }
    };

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].slug, "harvest-vision");
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn rapid_filter_changes_settle_on_the_last_input() {
    let base = start_server().await;
    let api: Arc<dyn ContentApi> = Arc::new(client_at(&base));
    let resource = ProjectsResource::new(api);

    let changes = resource.subscribe();
    // Two loads back-to-back, as when a user keeps typing: only the second
    // may ever reach the Ready state.
    resource.load(ProjectFilters {
        search: Some("harvest".to_string()),
        ..Default::default()
    });
    resource.load(ProjectFilters {
        search: Some("metro".to_string()),
        ..Default::default()
    });

    let page = loop {
        match resource.state() {
            ResourceState::Ready(page) => break page,
            ResourceState::Failed(error) => panic!("fetch failed: {error}"),
            _ => {
                timeout(Duration::from_secs(5), changes.recv())
                    .await
                    .expect("resource did not settle")
                    .expect("change channel closed");
            }
        }
    };

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].slug, "metro-pulse");
}
