use crate::page::Page;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::Mutex;

//브라우저 없이 터미널에서 흐름을 실행할 때 쓰는 페이지
#[derive(Default)]
pub struct TerminalPage {
    fields: HashMap<String, String>,
    texts: Mutex<HashMap<String, String>>,
    location: Mutex<Option<Url>>
}

impl TerminalPage {
    pub fn with_field(mut self, id: &str, value: impl Into<String>) -> Self {
        self.fields.insert(id.to_owned(), value.into());
        self
    }

    //마지막으로 이동한 주소
    pub fn location(&self) -> Option<Url> {
        self.location.lock().ok().and_then(|l| l.clone())
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.lock().ok().and_then(|t| t.get(id).cloned())
    }
}

impl Page for TerminalPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.fields.get(id).cloned()
    }

    fn set_text(&self, id: &str, text: &str) {
        println!("{}: {}", id, text);
        if let Ok(mut texts) = self.texts.lock() {
            texts.insert(id.to_owned(), text.to_owned());
        }
    }

    fn alert(&self, message: &str) {
        println!("[알림] {}", message);
    }

    fn navigate(&self, url: &Url) {
        println!("-> {}", url);
        if let Ok(mut location) = self.location.lock() {
            *location = Some(url.clone());
        }
    }
}
