//결재자가 문서를 승인(true)하거나 반려(false)할 때 보내는 바디
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequest {
    pub document_id: String,
    pub approval_state: bool
}
