//! The `SQLite3` database driver.
use std::panic::Location;

use async_trait::async_trait;
use lead_gateway_primitives::field::FieldValues;
use lead_gateway_primitives::DatabaseDriver;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, Connection, OptionalExtension};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error, ACTIVE_CONFIGURATIONS_LIMIT};
use crate::core::lead::{ActiveConfiguration, LandingPage, LandingPageRef, Lead};

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Sqlite {
    /// It runs `query` with a pooled connection on the blocking thread pool.
    async fn blocking<T, F>(&self, query: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> Result<T, Error> {
            let conn = pool.get().map_err(|e| (e, DRIVER))?;
            query(&conn)
        })
        .await
        .map_err(|e| (e, DRIVER))?
    }
}

#[async_trait]
impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `path` is not able to create `SqLite` database.
    fn new(config: &lead_gateway_configuration::Database) -> Result<Sqlite, Error> {
        let cm = SqliteConnectionManager::file(&config.path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_configurations_table = "
        CREATE TABLE IF NOT EXISTS configurations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            integration_api_key TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 0
        );"
        .to_string();

        let create_landing_pages_table = "
        CREATE TABLE IF NOT EXISTS landing_pages (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE
        );"
        .to_string();

        let create_leads_table = "
        CREATE TABLE IF NOT EXISTS leads (
            id TEXT PRIMARY KEY NOT NULL,
            created_at TEXT NOT NULL,
            landing_page_id TEXT NOT NULL,
            data TEXT NOT NULL DEFAULT '{}'
         );"
        .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_configurations_table, [])?;
        conn.execute(&create_landing_pages_table, [])?;
        conn.execute(&create_leads_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let drop_configurations_table = "
        DROP TABLE configurations;"
            .to_string();

        let drop_landing_pages_table = "
        DROP TABLE landing_pages;"
            .to_string();

        let drop_leads_table = "
        DROP TABLE leads;"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&drop_configurations_table, [])
            .and_then(|_| conn.execute(&drop_landing_pages_table, []))
            .and_then(|_| conn.execute(&drop_leads_table, []))?;

        Ok(())
    }

    /// Refer to [`databases::Database::get_active_configurations`](crate::core::databases::Database::get_active_configurations).
    async fn get_active_configurations(&self) -> Result<Vec<ActiveConfiguration>, Error> {
        let limit = i64::try_from(ACTIVE_CONFIGURATIONS_LIMIT).unwrap_or(i64::MAX);

        self.blocking(move |conn| {
            let mut stmt =
                conn.prepare("SELECT integration_api_key FROM configurations WHERE is_active = 1 ORDER BY id LIMIT ?1")?;

            let configurations = stmt
                .query_map([limit], |row| {
                    let integration_api_key: String = row.get(0)?;
                    Ok(ActiveConfiguration::new(integration_api_key))
                })?
                .collect::<Result<Vec<ActiveConfiguration>, _>>()?;

            Ok(configurations)
        })
        .await
    }

    /// Refer to [`databases::Database::add_configuration`](crate::core::databases::Database::add_configuration).
    async fn add_configuration(&self, integration_api_key: &str, is_active: bool) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO configurations (integration_api_key, is_active) VALUES (?1, ?2)",
            params![integration_api_key, is_active],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::add_landing_page`](crate::core::databases::Database::add_landing_page).
    async fn add_landing_page(&self, landing_page: &LandingPage) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO landing_pages (id, title, slug) VALUES (?1, ?2, ?3)",
            params![landing_page.id, landing_page.title, landing_page.slug],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }

    /// Refer to [`databases::Database::get_lead_with_landing_page`](crate::core::databases::Database::get_lead_with_landing_page).
    async fn get_lead_with_landing_page(&self, lead_id: &str) -> Result<Option<Lead>, Error> {
        let lead_id = lead_id.to_owned();

        self.blocking(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT l.id, l.created_at, l.landing_page_id, l.data, p.title, p.slug
                 FROM leads l
                 LEFT JOIN landing_pages p ON p.id = l.landing_page_id
                 WHERE l.id = ?1",
            )?;

            let row = stmt
                .query_row([&lead_id], |row| {
                    let id: String = row.get(0)?;
                    let created_at: String = row.get(1)?;
                    let landing_page_id: String = row.get(2)?;
                    let data: String = row.get(3)?;
                    let title: Option<String> = row.get(4)?;
                    let slug: Option<String> = row.get(5)?;
                    Ok((id, created_at, landing_page_id, data, title, slug))
                })
                .optional()?;

            let Some((id, created_at, landing_page_id, data, title, slug)) = row else {
                return Ok(None);
            };

            let data: FieldValues = serde_json::from_str(&data).map_err(|e| (e, DRIVER))?;

            let landing_page = match (title, slug) {
                (Some(title), Some(slug)) => Some(LandingPageRef::new(title, slug)),
                _ => None,
            };

            Ok(Some(Lead {
                id,
                created_at,
                landing_page_id,
                landing_page,
                data,
            }))
        })
        .await
    }

    /// Refer to [`databases::Database::add_lead`](crate::core::databases::Database::add_lead).
    async fn add_lead(&self, lead: &Lead) -> Result<usize, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let data = serde_json::to_string(&lead.data).map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO leads (id, created_at, landing_page_id, data) VALUES (?1, ?2, ?3, ?4)",
            params![lead.id, lead.created_at, lead.landing_page_id, data],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(insert)
        }
    }
}
