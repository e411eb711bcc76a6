pub fn connection_with_invalid_api_key(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::authenticated(bind_address, "wrong")
}

pub fn connection_with_no_api_key(bind_address: &str) -> ConnectionInfo {
    ConnectionInfo::anonymous(bind_address)
}

#[derive(Clone)]
pub struct ConnectionInfo {
    pub bind_address: String,
    pub api_key: Option<String>,
}

impl ConnectionInfo {
    pub fn authenticated(bind_address: &str, api_key: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            api_key: Some(api_key.to_string()),
        }
    }

    pub fn anonymous(bind_address: &str) -> Self {
        Self {
            bind_address: bind_address.to_string(),
            api_key: None,
        }
    }
}
