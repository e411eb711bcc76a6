//! The `PostgREST` database driver.
//!
//! It reads the tables of the hosted Postgres backend through its REST
//! interface. Every request authenticates with the service key, sent both in
//! the `apikey` header and as a bearer token.
//!
//! The schema is owned by the hosted backend, so creating and dropping the
//! tables only logs a notice.
use std::panic::Location;

use async_trait::async_trait;
use lead_gateway_primitives::field::FieldValues;
use lead_gateway_primitives::DatabaseDriver;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use super::{Database, Error, ACTIVE_CONFIGURATIONS_LIMIT};
use crate::core::lead::{ActiveConfiguration, LandingPage, LandingPageRef, Lead};

const DRIVER: DatabaseDriver = DatabaseDriver::Postgrest;

const LEAD_PROJECTION: &str = "id,created_at,landing_page_id,data,landing_page:landing_pages(title,slug)";

pub struct Postgrest {
    client: Client,
    base_url: Url,
    service_key: String,
}

#[derive(Deserialize)]
struct ConfigurationRow {
    integration_api_key: String,
}

#[derive(Deserialize)]
struct LandingPageRow {
    title: String,
    slug: String,
}

#[derive(Deserialize)]
struct LeadRow {
    id: String,
    created_at: String,
    landing_page_id: String,
    data: FieldValues,
    landing_page: Option<LandingPageRow>,
}

impl From<LeadRow> for Lead {
    fn from(row: LeadRow) -> Self {
        Lead {
            id: row.id,
            created_at: row.created_at,
            landing_page_id: row.landing_page_id,
            landing_page: row.landing_page.map(|page| LandingPageRef::new(page.title, page.slug)),
            data: row.data,
        }
    }
}

impl Postgrest {
    /// The URL of a table endpoint, for example `{base}/rest/v1/leads`.
    #[track_caller]
    fn table_url(&self, table: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("rest/v1/{table}"))
            .map_err(|err| Error::InvalidConfiguration {
                reason: err.to_string(),
                location: Location::caller(),
                driver: DRIVER,
            })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>, Error> {
        let url = self.table_url(table)?;

        let response = self.authorized(self.client.get(url)).query(query).send().await?;

        let body = successful(response).await?.text().await?;

        let rows = serde_json::from_str(&body).map_err(|e| (e, DRIVER))?;

        Ok(rows)
    }

    async fn insert(&self, table: &str, record: &serde_json::Value) -> Result<usize, Error> {
        let url = self.table_url(table)?;

        let response = self
            .authorized(self.client.post(url))
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        successful(response).await?;

        Ok(1)
    }
}

/// It passes through responses with a success status.
///
/// # Errors
///
/// Will return an `UnexpectedStatus` error with the response body otherwise.
async fn successful(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        body,
        location: Location::caller(),
        driver: DRIVER,
    })
}

#[async_trait]
impl Database for Postgrest {
    /// It instantiates a new `PostgREST` database driver. The `path` is the
    /// base URL of the hosted project.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `Error` if the `path` is not a URL, the `service_key` is
    /// missing or the HTTP client cannot be built.
    fn new(config: &lead_gateway_configuration::Database) -> Result<Self, Error> {
        let Some(service_key) = config.service_key.clone() else {
            return Err(Error::InvalidConfiguration {
                reason: "missing service key".to_string(),
                location: Location::caller(),
                driver: DRIVER,
            });
        };

        let mut base_url = Url::parse(&config.path).map_err(|err| Error::InvalidConfiguration {
            reason: format!("invalid base URL {}: {err}", config.path),
            location: Location::caller(),
            driver: DRIVER,
        })?;

        // `Url::join` replaces the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            service_key,
        })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        debug!(base_url = %self.base_url, "the postgrest schema is managed by the hosted backend, skipping table creation");
        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        warn!(base_url = %self.base_url, "the postgrest schema is managed by the hosted backend, refusing to drop tables");
        Ok(())
    }

    /// Refer to [`databases::Database::get_active_configurations`](crate::core::databases::Database::get_active_configurations).
    async fn get_active_configurations(&self) -> Result<Vec<ActiveConfiguration>, Error> {
        let rows: Vec<ConfigurationRow> = self
            .select(
                "configurations",
                &[
                    ("select", "integration_api_key".to_string()),
                    ("is_active", "eq.true".to_string()),
                    ("limit", ACTIVE_CONFIGURATIONS_LIMIT.to_string()),
                ],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| ActiveConfiguration::new(row.integration_api_key))
            .collect())
    }

    /// Refer to [`databases::Database::add_configuration`](crate::core::databases::Database::add_configuration).
    async fn add_configuration(&self, integration_api_key: &str, is_active: bool) -> Result<usize, Error> {
        self.insert(
            "configurations",
            &json!({ "integration_api_key": integration_api_key, "is_active": is_active }),
        )
        .await
    }

    /// Refer to [`databases::Database::add_landing_page`](crate::core::databases::Database::add_landing_page).
    async fn add_landing_page(&self, landing_page: &LandingPage) -> Result<usize, Error> {
        self.insert(
            "landing_pages",
            &json!({ "id": landing_page.id, "title": landing_page.title, "slug": landing_page.slug }),
        )
        .await
    }

    /// Refer to [`databases::Database::get_lead_with_landing_page`](crate::core::databases::Database::get_lead_with_landing_page).
    async fn get_lead_with_landing_page(&self, lead_id: &str) -> Result<Option<Lead>, Error> {
        let rows: Vec<LeadRow> = self
            .select(
                "leads",
                &[
                    ("select", LEAD_PROJECTION.to_string()),
                    ("id", format!("eq.{lead_id}")),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        Ok(rows.into_iter().next().map(Lead::from))
    }

    /// Refer to [`databases::Database::add_lead`](crate::core::databases::Database::add_lead).
    async fn add_lead(&self, lead: &Lead) -> Result<usize, Error> {
        self.insert(
            "leads",
            &json!({
                "id": lead.id,
                "created_at": lead.created_at,
                "landing_page_id": lead.landing_page_id,
                "data": lead.data,
            }),
        )
        .await
    }
}
