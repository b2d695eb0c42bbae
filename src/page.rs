use reqwest::Url;

//페이지 마크업에 미리 있어야 하는 요소 id. 버튼은 컨트롤러 메서드(on_submit 등)를 직접 호출해서 연결한다.
pub struct ElementId;

impl ElementId {
    pub const TITLE: &'static str = "title";
    pub const DETAIL: &'static str = "detail";
    pub const USERNAME: &'static str = "username";
}

//사용자에게 보이는 결과. 컨트롤러는 이 값만 만들고 실제 표시는 Page가 한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Alert(String),
    Navigate(Url),
    SetText { id: &'static str, text: String }
}

/*
    DOM 대신 사용하는 경계.
    -> 브라우저 없이 테스트할 수 있도록 입력값 읽기, 텍스트 쓰기, 알림, 이동만 노출한다.
*/
pub trait Page {
    //요소가 없으면 None
    fn field_value(&self, id: &str) -> Option<String>;
    fn set_text(&self, id: &str, text: &str);
    fn alert(&self, message: &str);
    fn navigate(&self, url: &Url);

    fn apply(&self, action: &UiAction) {
        match action {
            UiAction::Alert(message) => self.alert(message),
            UiAction::Navigate(url) => self.navigate(url),
            UiAction::SetText { id, text } => self.set_text(id, text)
        }
    }

    fn apply_all(&self, actions: &[UiAction]) {
        for action in actions {
            self.apply(action);
        }
    }
}
