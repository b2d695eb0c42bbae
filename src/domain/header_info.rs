//GET /login/header 응답. name 외의 필드는 무시한다.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub name: String
}
