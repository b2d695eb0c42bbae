pub mod configuration;
pub mod telemetry;
pub mod startup;
pub mod domain;
pub mod session_state;
pub mod api_client;
pub mod page;
pub mod presentation;
pub mod participants;
pub mod controllers;
//20251010 추가 터미널 클라이언트
pub mod cli;
pub mod terminal;

//오류와 그 원인(source) 체인을 모두 출력한다.
pub fn error_chain_fmt(
    e: &(dyn std::error::Error + 'static),
    f: &mut std::fmt::Formatter<'_>
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
