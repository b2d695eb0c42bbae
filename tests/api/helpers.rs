use approval_front::api_client::ApprovalClient;
use approval_front::page::{Page, UiAction};
use approval_front::presentation::FrontRoutes;
use approval_front::session_state::MemoryStorage;
use approval_front::startup::FrontContext;
use approval_front::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use reqwest::Url;
use secrecy::Secret;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

//'once_cell'을 사용해서 tracing 스택이 한 번만 초기화되도록 한다.
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    //TEST_LOG가 설정된 경우에만 로그를 출력한다.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to init subscriber");
    }
});

pub const FRONT_BASE_URL: &str = "http://localhost:3200";

//bunyan 로그 줄을 메모리에 모은다. 사용자에게 알리지 않는 실패가 로그로는 남는지 확인할 때 사용
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        get_subscriber("test".into(), "info".into(), self.clone())
    }

    pub fn records(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .expect("Log output is not utf-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("Log line is not json"))
            .collect()
    }

    pub fn errors_for(&self, operation: &str) -> Vec<serde_json::Value> {
        let message = format!("{} failed", operation);
        self.records()
            .into_iter()
            .filter(|r| r["level"] == 50 && r["msg"].as_str().map_or(false, |m| m.contains(&message)))
            .collect()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

//DOM 대신 적용된 동작을 기록하는 페이지. 텍스트 변경은 texts에, 알림/이동은 actions에 남긴다.
#[derive(Default)]
pub struct RecordingPage {
    fields: HashMap<String, String>,
    texts: Mutex<HashMap<String, String>>,
    actions: Mutex<Vec<UiAction>>
}

impl RecordingPage {
    pub fn set_field(&mut self, id: &str, value: &str) {
        self.fields.insert(id.to_owned(), value.to_owned());
    }

    pub fn actions(&self) -> Vec<UiAction> {
        self.actions.lock().unwrap().clone()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.lock().unwrap().get(id).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.actions()
            .into_iter()
            .filter_map(|a| match a {
                UiAction::Alert(message) => Some(message),
                _ => None
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Url> {
        self.actions()
            .into_iter()
            .filter_map(|a| match a {
                UiAction::Navigate(url) => Some(url),
                _ => None
            })
            .collect()
    }
}

impl Page for RecordingPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        self.texts.lock().unwrap().insert(id.to_owned(), text.to_owned());
    }

    fn alert(&self, message: &str) {
        self.actions.lock().unwrap().push(UiAction::Alert(message.to_owned()));
    }

    fn navigate(&self, url: &Url) {
        self.actions.lock().unwrap().push(UiAction::Navigate(url.clone()));
    }
}

pub struct TestApp {
    pub api_server: MockServer,
    pub context: FrontContext<MemoryStorage>,
    pub page: RecordingPage
}

impl TestApp {
    pub fn store_token(&self, token: &str) {
        self.context
            .session
            .set_token(Secret::new(token.to_owned()))
            .expect("Failed to store token");
    }

    pub fn stored_token(&self) -> Option<String> {
        use approval_front::session_state::SessionStorage;
        self.context
            .session
            .storage()
            .get_item("jwt")
            .expect("Failed to read storage")
    }

    pub fn front_url(&self, path: &str) -> Url {
        Url::parse(&format!("{}{}", FRONT_BASE_URL, path)).unwrap()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    //mock 서버가 결재 백엔드를 대신한다.
    let api_server = MockServer::start().await;
    let api_base_url = Url::parse(&api_server.uri()).expect("Invalid mock server url");
    let client = ApprovalClient::new(api_base_url, std::time::Duration::from_secs(2))
        .expect("Failed to build client");
    let routes = FrontRoutes::parse(FRONT_BASE_URL).expect("Invalid front url");

    TestApp {
        api_server,
        context: FrontContext::new(client, MemoryStorage::default(), routes),
        page: RecordingPage::default()
    }
}
