use lead_gateway_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::fixtures::{sample_landing_page, sample_lead, SAMPLE_API_KEY};
use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_api_key, connection_with_no_api_key, ConnectionInfo};
use crate::servers::api::v1::asserts::{assert_invalid_api_key, assert_lead_not_found, assert_missing_api_key};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_the_api_key_header() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;
    env.add_landing_page(&sample_landing_page()).await;
    env.add_lead(&sample_lead()).await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_api_key_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;

    let response = Client::new(connection_with_no_api_key(&env.bind_address().to_string()))
        .get_lead("L1")
        .await;

    assert_missing_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_api_key_is_empty() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;

    let response = Client::new(ConnectionInfo::authenticated(&env.bind_address().to_string(), ""))
        .get_lead("L1")
        .await;

    assert_missing_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_api_key_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;

    let response = Client::new(connection_with_invalid_api_key(&env.bind_address().to_string()))
        .get_lead("L1")
        .await;

    assert_invalid_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_with_the_api_key_of_an_inactive_configuration() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, false).await;
    env.add_landing_page(&sample_landing_page()).await;
    env.add_lead(&sample_lead()).await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_invalid_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_there_is_no_configuration() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    let response = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("L1").await;

    assert_invalid_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_compare_the_api_key_case_sensitively() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;

    let response = Client::new(env.get_connection_info("SECRET123")).get_lead("L1").await;

    assert_invalid_api_key(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_authenticate_before_checking_whether_the_lead_exists() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral()).await;

    env.add_configuration(SAMPLE_API_KEY, true).await;

    let unauthorized = Client::new(connection_with_invalid_api_key(&env.bind_address().to_string()))
        .get_lead("UNKNOWN")
        .await;
    let authorized = Client::new(env.get_connection_info(SAMPLE_API_KEY)).get_lead("UNKNOWN").await;

    assert_invalid_api_key(unauthorized).await;
    assert_lead_not_found(authorized).await;

    env.stop().await;
}
