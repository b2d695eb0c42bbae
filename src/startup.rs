use crate::api_client::ApprovalClient;
use crate::configuration::Settings;
use crate::presentation::FrontRoutes;
use crate::session_state::{FileStorage, SessionStorage, TypedSession};
use anyhow::Context;

/*
    컨트롤러들이 함께 쓰는 상태 (API 클라이언트, 세션, 이동 경로).
    전역 sessionStorage를 읽는 대신 생성 시 한 번 만들어서 각 컨트롤러에 넘긴다.
*/
pub struct FrontContext<S> {
    pub client: ApprovalClient,
    pub session: TypedSession<S>,
    pub routes: FrontRoutes
}

impl<S: SessionStorage> FrontContext<S> {
    pub fn new(client: ApprovalClient, storage: S, routes: FrontRoutes) -> Self {
        Self {
            client,
            session: TypedSession::new(storage),
            routes
        }
    }

    pub fn build_with_storage(configuration: &Settings, storage: S) -> Result<Self, anyhow::Error> {
        let api_base_url = configuration.api.base_url()
            .context("Invalid approval API base url.")?;
        let client = ApprovalClient::new(api_base_url, configuration.api.timeout())
            .context("Failed to build the approval API client.")?;
        let front_base_url = configuration.front.base_url()
            .context("Invalid front base url.")?;
        let routes = FrontRoutes::new(&front_base_url)
            .context("Invalid front base url.")?;
        Ok(Self::new(client, storage, routes))
    }
}

impl FrontContext<FileStorage> {
    //구성에 지정된 파일을 세션 저장소로 사용한다.
    pub fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let storage = FileStorage::new(configuration.session.storage_path.clone());
        Self::build_with_storage(configuration, storage)
    }
}
