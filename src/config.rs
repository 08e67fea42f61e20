use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub app_server_host: String,
    #[serde(default = "default_port")]
    pub app_server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        let config = envy::from_env::<AppConfig>()?;
        config.validate()
    }

    fn validate(self) -> Result<Self, envy::Error> {
        if self.app_server_host.trim().is_empty() {
            return Err(envy::Error::Custom(
                "APP_SERVER_HOST cannot be empty.".to_string(),
            ));
        }

        Ok(self)
    }

    /// Address string handed to the TCP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.app_server_host, self.app_server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_server_host: default_host(),
            app_server_port: default_port(),
        }
    }
}
