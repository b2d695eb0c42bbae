use crate::controllers::read_token;
use crate::page::{Page, UiAction};
use crate::presentation::{present_header, present_join, present_logout, present_missing_token, Messages};
use crate::session_state::SessionStorage;
use crate::startup::FrontContext;
use crate::telemetry::log_failure;
use secrecy::Secret;

/*
    헤더 영역 컨트롤러
    1. 페이지 로딩 시 토큰 확인 -> 없으면 로그인 페이지로 이동
    2. 토큰이 있으면 사용자 이름을 가져와서 username 요소에 표시
    3. 가입 권한 요청 버튼 / 로그아웃 버튼 처리
*/
pub struct HeaderController<'a, S, P> {
    context: &'a FrontContext<S>,
    page: &'a P,
    //로딩 시점에 읽은 토큰. 가입 권한 요청은 이 값을 사용한다.
    load_token: Option<Secret<String>>
}

impl<'a, S: SessionStorage, P: Page> HeaderController<'a, S, P> {
    pub fn new(context: &'a FrontContext<S>, page: &'a P) -> Self {
        Self {
            context,
            page,
            load_token: None
        }
    }

    #[tracing::instrument(name = "Load header", skip(self))]
    pub async fn on_load(&mut self) {
        let Some(token) = read_token(&self.context.session) else {
            tracing::info!("No session token. Redirecting to the login page");
            self.page.apply_all(&present_missing_token(&self.context.routes));
            return;
        };

        let result = self.context.client.fetch_header(&token).await;
        if let Err(e) = &result {
            log_failure("Fetch header info", e);
        }
        self.page.apply_all(&present_header(&result));
        self.load_token = Some(token);
    }

    #[tracing::instrument(name = "Join button clicked", skip(self))]
    pub async fn on_join_click(&self) {
        let Some(token) = &self.load_token else {
            tracing::warn!("Join requested without a session token loaded");
            self.page.apply(&UiAction::Alert(Messages::NO_PERMISSION.into()));
            return;
        };

        let result = self.context.client.request_join(token).await;
        if let Err(e) = &result {
            log_failure("Request join privilege", e);
        }
        self.page.apply_all(&present_join(&result, &self.context.routes));
    }

    //로그아웃은 클릭 시점에 토큰을 다시 읽는다.
    #[tracing::instrument(name = "Logout button clicked", skip(self))]
    pub async fn on_logout_click(&self) {
        let Some(token) = read_token(&self.context.session) else {
            tracing::warn!("Logout requested without a session token");
            return;
        };

        let result = self.context.client.logout(&token).await;
        match &result {
            Ok(()) => {
                if let Err(e) = self.context.session.clear_token() {
                    log_failure("Clear session token", &e);
                }
            }
            Err(e) => log_failure("Log out", e)
        }
        self.page.apply_all(&present_logout(&result, &self.context.routes));
    }
}
