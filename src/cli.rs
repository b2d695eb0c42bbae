use crate::domain::ParticipantId;
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(version, about = "결재 시스템 터미널 클라이언트", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store or clear the session token (login itself is done by the login page)
    #[command(subcommand)]
    Token(TokenCommands),
    /// Load the header and show the current user's name
    Header,
    /// Ask for the join (registration) privilege
    Join,
    /// Log out and clear the stored token
    Logout,
    /// Submit a report for approval
    Submit(ReportArgs),
    /// Temporarily store a report
    TempStore(ReportArgs),
    /// Approve or reject a document
    Decide {
        document_id: String,
        #[arg(long)]
        reject: bool
    }
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    Set { token: String },
    Clear
}

//clap은 FromStr보다 From<String>을 먼저 고르므로 숫자 id 변환을 직접 지정한다.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long)]
    pub detail: String,
    #[arg(short, long = "approver", value_parser = ParticipantId::from_str)]
    pub approvers: Vec<ParticipantId>,
    #[arg(short, long = "reference", value_parser = ParticipantId::from_str)]
    pub references: Vec<ParticipantId>
}
