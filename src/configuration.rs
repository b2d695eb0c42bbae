use reqwest::Url;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
    pub front: FrontSettings,
    pub session: SessionSettings
}

//결재 백엔드 API (기본 http://localhost:8080)
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_milliseconds: u64
}

//리다이렉트 대상이 되는 프론트 페이지 (기본 http://localhost:3200)
#[derive(serde::Deserialize, Clone, Debug)]
pub struct FrontSettings {
    pub base_url: String
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SessionSettings {
    pub storage_path: std::path::PathBuf
}

impl ApiSettings {
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

impl FrontSettings {
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");
    //실행환경을 식별한다. 지정되지 않았다면 'local'로 기본 설정한다.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(
            config::File::from(configuration_directory.join("base.yaml"))
        )
        .add_source(
            config::File::from(configuration_directory.join(&environment_filename))
        )
        //환경 변수로 덮어쓴다. ex) APP_API__BASE_URL=http://10.0.0.1:8080 -> Settings.api.base_url
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}

//애플리케이션이 사용할 수 있는 런타임 환경
#[derive(Debug)]
pub enum Environment {
    Local,
    Production
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production"
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either local or production.",
                other
            )),
        }
    }
}
