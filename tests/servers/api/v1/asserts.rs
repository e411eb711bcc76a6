use lead_gateway::servers::apis::v1::context::lead::resources::Lead;
use reqwest::Response;

// Resource responses

pub async fn assert_lead(response: Response, lead: Lead) {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.json::<Lead>().await.unwrap(), lead);
}

// Error responses

pub async fn assert_error(response: Response, status: u16, message: &str) {
    assert_eq!(response.status(), status);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(response.text().await.unwrap(), format!("{{\"error\":\"{message}\"}}"));
}

pub async fn assert_missing_api_key(response: Response) {
    assert_error(response, 401, "API key não fornecida").await;
}

pub async fn assert_invalid_api_key(response: Response) {
    assert_error(response, 401, "API key inválida").await;
}

pub async fn assert_lead_not_found(response: Response) {
    assert_error(response, 404, "Lead não encontrado").await;
}

pub async fn assert_internal_server_error(response: Response) {
    assert_error(response, 500, "Erro interno do servidor").await;
}
