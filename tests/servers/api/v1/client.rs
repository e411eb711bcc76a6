use reqwest::Response;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    /// A client for the endpoints served without the version prefix.
    pub fn unversioned(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/".to_string(),
        }
    }

    pub async fn get_lead(&self, lead_id: &str) -> Response {
        self.get(&format!("leads/{lead_id}")).await
    }

    pub async fn get(&self, path: &str) -> Response {
        let request = reqwest::Client::new().get(self.base_url(path));

        let request = match &self.connection_info.api_key {
            Some(api_key) => request.header("x-api-key", api_key),
            None => request,
        };

        request.send().await.unwrap()
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(url: &str) -> Response {
    reqwest::Client::builder().build().unwrap().get(url).send().await.unwrap()
}
