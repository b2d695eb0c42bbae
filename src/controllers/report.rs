use crate::controllers::read_token;
use crate::domain::{TemplatePayload, TemplateType};
use crate::page::{ElementId, Page};
use crate::participants::ParticipantSource;
use crate::presentation::{present_missing_token, present_submission, SubmitMode};
use crate::session_state::SessionStorage;
use crate::startup::FrontContext;
use crate::telemetry::log_failure;

//보고서 작성 화면. 제출과 임시 저장은 호출하는 API만 다르다.
pub struct ReportComposer<'a, S, P, R> {
    context: &'a FrontContext<S>,
    page: &'a P,
    participants: R
}

impl<'a, S, P, R> ReportComposer<'a, S, P, R>
where
    S: SessionStorage,
    P: Page,
    R: ParticipantSource
{
    pub fn new(context: &'a FrontContext<S>, page: &'a P, participants: R) -> Self {
        Self {
            context,
            page,
            participants
        }
    }

    //페이지 로딩 시 한 번 호출
    #[tracing::instrument(name = "Initialize report composer", skip(self))]
    pub async fn init(&mut self) {
        if let Err(e) = self.participants.init().await {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to load participants"
            );
        }
    }

    //입력 요소가 없으면 빈 문자열로 읽는다.
    pub fn create_template_data(&self) -> TemplatePayload {
        TemplatePayload {
            template_type: TemplateType::Report,
            ref_list: self.participants.reference_list(),
            approver_list: self.participants.approve_list(),
            title: self.page.field_value(ElementId::TITLE).unwrap_or_default(),
            detail: self.page.field_value(ElementId::DETAIL).unwrap_or_default()
        }
    }

    pub async fn on_submit(&self) {
        self.submit(SubmitMode::Submit).await
    }

    pub async fn on_temp_store(&self) {
        self.submit(SubmitMode::TempStore).await
    }

    #[tracing::instrument(name = "Submit report", skip(self))]
    async fn submit(&self, mode: SubmitMode) {
        let Some(token) = read_token(&self.context.session) else {
            tracing::info!("No session token. Redirecting to the login page");
            self.page.apply_all(&present_missing_token(&self.context.routes));
            return;
        };

        let template = self.create_template_data();
        let result = match mode {
            SubmitMode::Submit => self.context.client
                .create_template(&token, &template)
                .await
                .map(Some),
            SubmitMode::TempStore => self.context.client
                .temp_store_template(&token, &template)
                .await
                .map(|()| None)
        };
        match &result {
            Ok(Some(template_id)) => {
                tracing::info!(template_id = %template_id.as_ref(), "Template created")
            }
            Ok(None) => tracing::info!("Template stored temporarily"),
            Err(e) => log_failure("Submit report", e)
        }
        self.page.apply_all(&present_submission(&result, mode, &self.context.routes));
    }
}
