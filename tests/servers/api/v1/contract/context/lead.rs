use lead_gateway::servers::apis::v1::context::lead::resources::{LandingPage, Lead};
use lead_gateway_test_helpers::configuration;
use serde_json::json;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{
    lead_with_typed_data, sample_data, sample_landing_page, sample_lead, typed_data, SAMPLE_API_KEY,
};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{assert_internal_server_error, assert_lead, assert_lead_not_found};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

fn expected_sample_lead() -> Lead {
    Lead {
        id: "L1".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
        landing_page_id: "P1".to_string(),
        landing_page: Some(LandingPage {
            title: "Launch".to_string(),
            slug: "launch".to_string(),
        }),
        data: sample_data(),
    }
}

async fn started_with_sample_lead() -> Started {
    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;
    env.add_landing_page(&sample_landing_page()).await;
    env.add_lead(&sample_lead()).await;

    env
}

#[tokio::test]
async fn should_allow_getting_a_lead_with_its_landing_page() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_lead(response, expected_sample_lead()).await;

    env.stop().await;
}

#[tokio::test]
async fn should_only_expose_the_title_and_slug_of_the_landing_page() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(
        body,
        json!({
            "id": "L1",
            "created_at": "2024-01-01T00:00:00Z",
            "landing_page_id": "P1",
            "landing_page": { "title": "Launch", "slug": "launch" },
            "data": { "name": "Ana", "phone": "+5511999999999" }
        })
    );

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_stored_form_values_unchanged() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    env.add_lead(&lead_with_typed_data()).await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L2").await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(body["data"], typed_data());
    assert_eq!(body["data"]["customer_id"].as_u64(), Some(9_007_199_254_740_993));
    assert!(body["data"]["ratio"].is_f64());

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_lead_without_the_version_prefix() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let response = Client::unversioned(env.get_connection_info(SAMPLE_API_KEY))
        .get_lead("L1")
        .await;

    assert_lead(response, expected_sample_lead()).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_same_lead_on_repeated_requests() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let client = Client::new(env.get_connection_info(SAMPLE_API_KEY));

    let first = client.get_lead("L1").await.text().await.unwrap();
    let second = client.get_lead("L1").await.text().await.unwrap();

    assert_eq!(first, second);

    env.stop().await;
}

#[tokio::test]
async fn should_return_a_null_landing_page_when_the_landing_page_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;
    env.add_lead(&sample_lead()).await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_lead(
        response,
        Lead {
            landing_page: None,
            ..expected_sample_lead()
        },
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_while_getting_a_lead_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY))
        .get_lead("UNKNOWN")
        .await;

    assert_lead_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_when_the_lead_cannot_be_read() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    force_database_error(&env);

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_internal_server_error(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_add_a_request_id_to_the_response() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = started_with_sample_lead().await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert!(response.headers().get("x-request-id").is_some());

    env.stop().await;
}
