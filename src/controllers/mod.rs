mod approve;
mod header;
mod report;

pub use approve::DecisionController;
pub use header::HeaderController;
pub use report::ReportComposer;

use crate::session_state::{SessionStorage, TypedSession};
use secrecy::Secret;

//저장소를 읽지 못하면 토큰이 없는 것과 같이 처리한다. (원인은 로그로 남김)
fn read_token<S: SessionStorage>(session: &TypedSession<S>) -> Option<Secret<String>> {
    match session.get_token() {
        Ok(token) => token,
        Err(e) => {
            crate::telemetry::log_failure("Read session token", &e);
            None
        }
    }
}
