use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub syllabi_collection: String,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub document_excerpt_chars: usize,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "toq-local".to_string()),
            syllabi_collection: env::var("SYLLABI_COLLECTION")
                .unwrap_or_else(|_| "syllabi".to_string()),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "dev_openai_key".to_string()),
            ),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            document_excerpt_chars: env::var("DOCUMENT_EXCERPT_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(4000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret() == "dev_openai_key" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "toq-test".to_string(),
            syllabi_collection: "syllabi".to_string(),
            openai_api_key: SecretString::from("test_openai_key".to_string()),
            openai_model: "gpt-4".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            document_excerpt_chars: 4000,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}
