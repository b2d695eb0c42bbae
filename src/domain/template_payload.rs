use crate::domain::ParticipantId;

//백엔드가 저장하는 문서 종류 (휴가, 출장, 보고서, 경비)
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateType {
    Vacation,
    BusinessTrip,
    Report,
    Expense
}

//제출 시마다 새로 만들고 요청이 끝나면 버린다.
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePayload {
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub ref_list: Vec<ParticipantId>,
    pub approver_list: Vec<ParticipantId>,
    pub title: String,
    pub detail: String
}

//POST /sign/create 가 돌려주는 MongoDB 템플릿 id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: String) -> Self {
        Self(id.trim().to_owned())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
