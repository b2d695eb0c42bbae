use anyhow::Context;
use approval_front::cli::{Cli, Commands, ReportArgs, TokenCommands};
use approval_front::configuration::get_configuration;
use approval_front::controllers::{DecisionController, HeaderController, ReportComposer};
use approval_front::page::ElementId;
use approval_front::participants::SelectedParticipants;
use approval_front::startup::FrontContext;
use approval_front::telemetry::{get_subscriber, init_subscriber};
use approval_front::terminal::TerminalPage;
use clap::Parser;
use secrecy::Secret;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    //화면 출력과 섞이지 않도록 로그는 stderr로 보낸다.
    let subscriber = get_subscriber("approval-front".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let context = FrontContext::build(&configuration)?;

    match cli.command {
        Commands::Token(TokenCommands::Set { token }) => {
            context.session.set_token(Secret::new(token))?
        }
        Commands::Token(TokenCommands::Clear) => context.session.clear_token()?,
        Commands::Header => {
            let page = TerminalPage::default();
            HeaderController::new(&context, &page).on_load().await;
        }
        //가입 권한 요청과 로그아웃 버튼은 헤더 페이지에 있으므로 먼저 로딩한다.
        Commands::Join => {
            let page = TerminalPage::default();
            let mut controller = HeaderController::new(&context, &page);
            controller.on_load().await;
            if page.location().is_none() {
                controller.on_join_click().await;
            }
        }
        Commands::Logout => {
            let page = TerminalPage::default();
            let mut controller = HeaderController::new(&context, &page);
            controller.on_load().await;
            if page.location().is_none() {
                controller.on_logout_click().await;
            }
        }
        Commands::Submit(args) => {
            let (page, participants) = report_page(args);
            let mut composer = ReportComposer::new(&context, &page, participants);
            composer.init().await;
            composer.on_submit().await;
        }
        Commands::TempStore(args) => {
            let (page, participants) = report_page(args);
            let mut composer = ReportComposer::new(&context, &page, participants);
            composer.init().await;
            composer.on_temp_store().await;
        }
        Commands::Decide { document_id, reject } => {
            let page = TerminalPage::default();
            DecisionController::new(&context, &page)
                .on_decide(&document_id, !reject)
                .await;
        }
    }
    Ok(())
}

fn report_page(args: ReportArgs) -> (TerminalPage, SelectedParticipants) {
    let page = TerminalPage::default()
        .with_field(ElementId::TITLE, args.title)
        .with_field(ElementId::DETAIL, args.detail);
    (page, SelectedParticipants::new(args.approvers, args.references))
}
