use crate::controllers::read_token;
use crate::domain::ApproveRequest;
use crate::page::Page;
use crate::presentation::{present_decision, present_missing_token};
use crate::session_state::SessionStorage;
use crate::startup::FrontContext;
use crate::telemetry::log_failure;

//결재자가 문서를 승인/반려한다.
pub struct DecisionController<'a, S, P> {
    context: &'a FrontContext<S>,
    page: &'a P
}

impl<'a, S: SessionStorage, P: Page> DecisionController<'a, S, P> {
    pub fn new(context: &'a FrontContext<S>, page: &'a P) -> Self {
        Self { context, page }
    }

    #[tracing::instrument(name = "Decide on document", skip(self))]
    pub async fn on_decide(&self, document_id: &str, approve: bool) {
        let Some(token) = read_token(&self.context.session) else {
            self.page.apply_all(&present_missing_token(&self.context.routes));
            return;
        };

        let request = ApproveRequest {
            document_id: document_id.to_owned(),
            approval_state: approve
        };
        let result = self.context.client.approve_document(&token, &request).await;
        if let Err(e) = &result {
            log_failure("Decide on document", e);
        }
        self.page.apply_all(&present_decision(&result, approve, &self.context.routes));
    }
}
