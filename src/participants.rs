use crate::domain::ParticipantId;

/*
    결재자/참조자 목록을 제공하는 쪽.
    -> 목록을 어떻게 채우는지는 구현체가 정한다. 페이지 로딩 시 init을 한 번 호출한다.
*/
#[allow(async_fn_in_trait)]
pub trait ParticipantSource {
    async fn init(&mut self) -> Result<(), anyhow::Error>;
    fn approve_list(&self) -> Vec<ParticipantId>;
    fn reference_list(&self) -> Vec<ParticipantId>;
}

//이미 선택이 끝난 목록. CLI 인자처럼 미리 정해진 값을 그대로 돌려준다.
#[derive(Debug, Clone, Default)]
pub struct SelectedParticipants {
    approvers: Vec<ParticipantId>,
    references: Vec<ParticipantId>
}

impl SelectedParticipants {
    pub fn new(approvers: Vec<ParticipantId>, references: Vec<ParticipantId>) -> Self {
        Self { approvers, references }
    }

    pub fn add_approver(&mut self, id: impl Into<ParticipantId>) {
        self.approvers.push(id.into());
    }

    pub fn add_reference(&mut self, id: impl Into<ParticipantId>) {
        self.references.push(id.into());
    }
}

impl ParticipantSource for SelectedParticipants {
    async fn init(&mut self) -> Result<(), anyhow::Error> {
        tracing::debug!(
            approvers = self.approvers.len(),
            references = self.references.len(),
            "Participants are already selected"
        );
        Ok(())
    }

    fn approve_list(&self) -> Vec<ParticipantId> {
        self.approvers.clone()
    }

    fn reference_list(&self) -> Vec<ParticipantId> {
        self.references.clone()
    }
}
