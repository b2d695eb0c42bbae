use crate::api_client::ApiError;
use crate::domain::{HeaderInfo, TemplateId};
use crate::page::{ElementId, UiAction};
use reqwest::Url;

//사용자에게 보여주는 고정 알림 문구
pub struct Messages;

impl Messages {
    pub const LOGIN_REQUIRED: &'static str = "로그인이 필요합니다.";
    pub const NO_PERMISSION: &'static str = "권한이 없습니다.";
    pub const AUTHORIZED: &'static str = "권한자입니다.";
    pub const LOGGED_OUT: &'static str = "로그아웃 되었습니다!";
    pub const SUBMITTED: &'static str = "결재 신청이 완료되었습니다.";
    pub const TEMP_STORED: &'static str = "임시 저장 되었습니다.";
    pub const APPROVED: &'static str = "결재 승인이 완료되었습니다.";
    pub const REJECTED: &'static str = "결재 반려가 완료되었습니다.";
}

//프론트 서버 기준 이동 경로. 생성 시 한 번만 파싱한다.
#[derive(Debug, Clone)]
pub struct FrontRoutes {
    login: Url,
    registration: Url,
    approve_main: Url
}

impl FrontRoutes {
    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Self::new(&Url::parse(base_url)?)
    }

    pub fn new(base_url: &Url) -> Result<Self, url::ParseError> {
        //'join'이 마지막 경로 조각을 덮어쓰지 않도록 '/'로 끝나게 맞춘다.
        let base = Url::parse(&format!("{}/", base_url.as_str().trim_end_matches('/')))?;
        Ok(Self {
            login: base.join("login")?,
            registration: base.join("registration")?,
            approve_main: base.join("approve/main")?
        })
    }

    pub fn login(&self) -> &Url {
        &self.login
    }

    pub fn registration(&self) -> &Url {
        &self.registration
    }

    pub fn approve_main(&self) -> &Url {
        &self.approve_main
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Submit,
    TempStore
}

pub fn present_missing_token(routes: &FrontRoutes) -> Vec<UiAction> {
    vec![
        UiAction::Alert(Messages::LOGIN_REQUIRED.into()),
        UiAction::Navigate(routes.login().clone())
    ]
}

//실패하면 username을 그대로 둔다. (로그만 남김)
pub fn present_header(result: &Result<HeaderInfo, ApiError>) -> Vec<UiAction> {
    match result {
        Ok(info) => vec![UiAction::SetText {
            id: ElementId::USERNAME,
            text: info.name.clone()
        }],
        Err(_) => vec![]
    }
}

//응답을 받았는데 2xx가 아니면 권한 없음 알림. 응답 자체를 못 받으면 로그만 남긴다.
pub fn present_join(result: &Result<(), ApiError>, routes: &FrontRoutes) -> Vec<UiAction> {
    match result {
        Ok(()) => vec![
            UiAction::Alert(Messages::AUTHORIZED.into()),
            UiAction::Navigate(routes.registration().clone())
        ],
        Err(e) if e.status().is_some() => vec![UiAction::Alert(Messages::NO_PERMISSION.into())],
        Err(_) => vec![]
    }
}

pub fn present_logout(result: &Result<(), ApiError>, routes: &FrontRoutes) -> Vec<UiAction> {
    match result {
        Ok(()) => vec![
            UiAction::Alert(Messages::LOGGED_OUT.into()),
            UiAction::Navigate(routes.login().clone())
        ],
        Err(_) => vec![]
    }
}

//템플릿 제출/임시 저장 실패는 사용자에게 알리지 않는다.
pub fn present_submission(
    result: &Result<Option<TemplateId>, ApiError>,
    mode: SubmitMode,
    routes: &FrontRoutes
) -> Vec<UiAction> {
    let message = match mode {
        SubmitMode::Submit => Messages::SUBMITTED,
        SubmitMode::TempStore => Messages::TEMP_STORED
    };
    match result {
        Ok(_) => vec![
            UiAction::Alert(message.into()),
            UiAction::Navigate(routes.approve_main().clone())
        ],
        Err(_) => vec![]
    }
}

pub fn present_decision(
    result: &Result<(), ApiError>,
    approve: bool,
    routes: &FrontRoutes
) -> Vec<UiAction> {
    let message = if approve { Messages::APPROVED } else { Messages::REJECTED };
    match result {
        Ok(()) => vec![
            UiAction::Alert(message.into()),
            UiAction::Navigate(routes.approve_main().clone())
        ],
        Err(_) => vec![]
    }
}
