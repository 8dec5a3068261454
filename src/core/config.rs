//! Configuration - Settings loaded from environment variables

use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
const DEFAULT_FROM_NAME: &str = "plann.er Team";
const DEFAULT_FROM_ADDRESS: &str = "support@plann.er";

/// How outgoing mail leaves the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTransportKind {
    /// Deliver through an SMTP relay
    Smtp,
    /// Only log the message, nothing is delivered
    Log,
}

impl FromStr for MailTransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smtp" => Ok(Self::Smtp),
            "log" => Ok(Self::Log),
            other => Err(format!(
                "Invalid MAIL_TRANSPORT '{}': expected 'smtp' or 'log'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub transport: MailTransportKind,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_starttls: bool,
    pub from_name: String,
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base URL of this API, used to build confirmation links
    pub api_base_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub app_env: String,
    pub mail: MailConfig,
}

impl Config {
    /// Loads the configuration from environment variables.
    /// Calls dotenv() first so a local `.env` file is honoured.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "DATABASE_URL must be set in .env file".to_string())?;

        let api_base_url = lookup("API_BASE_URL").unwrap_or_else(|| {
            warn!("API_BASE_URL not set, using default {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        });

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3333".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());

        let transport = match lookup("MAIL_TRANSPORT") {
            Some(value) => value.parse::<MailTransportKind>()?,
            None if app_env == "production" => MailTransportKind::Smtp,
            None => MailTransportKind::Log,
        };

        let smtp_port = lookup("SMTP_PORT")
            .unwrap_or_else(|| "587".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SMTP_PORT: must be a number between 0-65535".to_string())?;

        let smtp_starttls = match lookup("SMTP_STARTTLS") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| "Invalid SMTP_STARTTLS: must be true or false".to_string())?,
            None => true,
        };

        let mail = MailConfig {
            transport,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            smtp_port,
            smtp_username: lookup("SMTP_USERNAME").filter(|v| !v.is_empty()),
            smtp_password: lookup("SMTP_PASSWORD").filter(|v| !v.is_empty()),
            smtp_starttls,
            from_name: lookup("MAIL_FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.to_string()),
            from_address: lookup("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|| DEFAULT_FROM_ADDRESS.to_string()),
        };

        Ok(Config {
            database_url,
            api_base_url,
            server_host,
            server_port,
            max_connections,
            app_env,
            mail,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logs the configuration (secrets hidden)
    pub fn print_info(&self) {
        info!("Server configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.server_address());
        info!("   API Base URL: {}", self.api_base_url);
        info!("   Database: {}", Self::mask_url(&self.database_url));
        info!("   Max DB Connections: {}", self.max_connections);
        info!("   Mail Transport: {:?}", self.mail.transport);
        if self.mail.transport == MailTransportKind::Smtp {
            info!(
                "   SMTP: {}:{} (starttls: {}, auth: {})",
                self.mail.smtp_host,
                self.mail.smtp_port,
                self.mail.smtp_starttls,
                self.mail.smtp_username.is_some()
            );
        }
        info!(
            "   Mail Sender: {} <{}>",
            self.mail.from_name, self.mail.from_address
        );
    }

    /// Masks the credentials of the database URL for logging
    fn mask_url(url: &str) -> String {
        // rfind: the password itself may contain '@'
        match (url.split_once("://"), url.rfind('@')) {
            (Some((scheme, _)), Some(at_pos)) => format!("{}://***{}", scheme, &url[at_pos..]),
            _ => "***".to_string(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
