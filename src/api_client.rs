use crate::domain::{ApproveRequest, HeaderInfo, TemplateId, TemplatePayload};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

//결재 백엔드 REST 호출을 한 곳에 모은다. 모든 요청은 Bearer 토큰으로 인증한다.
pub struct ApprovalClient {
    http_client: Client,
    base_url: String
}

impl ApprovalClient {
    pub fn new(
        base_url: Url,
        timeout: std::time::Duration
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http_client,
            //끝의 '/'는 제거해서 경로를 그대로 이어 붙인다. (base_url이 /api 같은 prefix를 가져도 유지됨)
            base_url: base_url.as_str().trim_end_matches('/').to_owned()
        })
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: &Secret<String>
    ) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token.expose_secret())
    }

    #[tracing::instrument(name = "Fetch header info", skip(self, token))]
    pub async fn fetch_header(
        &self,
        token: &Secret<String>
    ) -> Result<HeaderInfo, ApiError> {
        let response = send(self.request(Method::GET, "/login/header", token)).await?;
        response.json::<HeaderInfo>().await.map_err(ApiError::Decode)
    }

    #[tracing::instrument(name = "Request join privilege", skip(self, token))]
    pub async fn request_join(&self, token: &Secret<String>) -> Result<(), ApiError> {
        send(self.request(Method::GET, "/login/joinget", token)).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Log out", skip(self, token))]
    pub async fn logout(&self, token: &Secret<String>) -> Result<(), ApiError> {
        send(self.request(Method::POST, "/login/logout", token)).await?;
        Ok(())
    }

    #[tracing::instrument(
        name = "Create template",
        skip(self, token, template),
        fields(template_type = ?template.template_type)
    )]
    pub async fn create_template(
        &self,
        token: &Secret<String>,
        template: &TemplatePayload
    ) -> Result<TemplateId, ApiError> {
        let response = send(
            self.request(Method::POST, "/sign/create", token).json(template)
        )
        .await?;
        let id = response.text().await.map_err(ApiError::Decode)?;
        Ok(TemplateId::new(id))
    }

    #[tracing::instrument(
        name = "Temporarily store template",
        skip(self, token, template),
        fields(template_type = ?template.template_type)
    )]
    pub async fn temp_store_template(
        &self,
        token: &Secret<String>,
        template: &TemplatePayload
    ) -> Result<(), ApiError> {
        send(self.request(Method::POST, "/sign/temporaryStorage", token).json(template)).await?;
        Ok(())
    }

    //백엔드 경로 철자가 'arrove'로 되어 있다.
    #[tracing::instrument(
        name = "Decide on document",
        skip(self, token, request),
        fields(document_id = %request.document_id, approval_state = request.approval_state)
    )]
    pub async fn approve_document(
        &self,
        token: &Secret<String>,
        request: &ApproveRequest
    ) -> Result<(), ApiError> {
        send(self.request(Method::POST, "/sign/arrove", token).json(request)).await?;
        Ok(())
    }
}

//네트워크 오류와 2xx가 아닌 응답을 ApiError로 구분한다.
async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(ApiError::Network)?;
    match response.status() {
        s if s.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
        s => Err(ApiError::UnexpectedStatus(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Unauthorized,
    Forbidden,
    Status,
    Network,
    Decode
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("The approval API rejected the credentials.")]
    Unauthorized,
    #[error("The current user has no permission for this request.")]
    Forbidden,
    #[error("The approval API returned an unexpected status: {0}.")]
    UnexpectedStatus(StatusCode),
    #[error("Failed to reach the approval API.")]
    Network(#[source] reqwest::Error),
    #[error("Failed to decode the approval API response.")]
    Decode(#[source] reqwest::Error)
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Unauthorized => ApiErrorKind::Unauthorized,
            ApiError::Forbidden => ApiErrorKind::Forbidden,
            ApiError::UnexpectedStatus(_) => ApiErrorKind::Status,
            ApiError::Network(_) => ApiErrorKind::Network,
            ApiError::Decode(_) => ApiErrorKind::Decode
        }
    }

    //HTTP 응답을 받은 경우에만 상태 코드가 있다.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::Forbidden => Some(StatusCode::FORBIDDEN),
            ApiError::UnexpectedStatus(s) => Some(*s),
            ApiError::Network(_) | ApiError::Decode(_) => None
        }
    }
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::error_chain_fmt(self, f)
    }
}
