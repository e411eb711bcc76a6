use std::net::SocketAddr;
use std::sync::Arc;

use futures::executor::block_on;
use lead_gateway::bootstrap::app::initialize_with_configuration;
use lead_gateway::bootstrap::jobs::make_rust_tls;
use lead_gateway::core::lead::{LandingPage, Lead};
use lead_gateway::core::Gateway;
use lead_gateway::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use lead_gateway_configuration::{Configuration, HttpApi};

use super::connection_info::ConnectionInfo;

pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub gateway: Arc<Gateway>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// Add a configuration to the database
    pub async fn add_configuration(&self, integration_api_key: &str, is_active: bool) {
        self.gateway
            .database
            .add_configuration(integration_api_key, is_active)
            .await
            .unwrap();
    }

    /// Add a landing page to the database
    pub async fn add_landing_page(&self, landing_page: &LandingPage) {
        self.gateway.database.add_landing_page(landing_page).await.unwrap();
    }

    /// Add a lead to the database
    pub async fn add_lead(&self, lead: &Lead) {
        self.gateway.database.add_lead(lead).await.unwrap();
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Configuration) -> Self {
        let gateway = initialize_with_configuration(configuration);

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config.bind_address;

        let tls = block_on(make_rust_tls(&config.tsl_config)).map(|tls| tls.expect("tls config failed"));

        let server = ApiServer::new(Launcher::new(bind_to, tls));

        Self { config, gateway, server }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            gateway: self.gateway.clone(),
            server: self.server.start(self.gateway).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Configuration) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            gateway: self.gateway,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self, api_key: &str) -> ConnectionInfo {
        ConnectionInfo::authenticated(&self.server.state.binding.to_string(), api_key)
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
