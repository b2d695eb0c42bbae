use crate::helpers::spawn_app;
use approval_front::controllers::ReportComposer;
use approval_front::page::ElementId;
use approval_front::participants::SelectedParticipants;
use approval_front::presentation::Messages;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn participants() -> SelectedParticipants {
    let mut participants = SelectedParticipants::default();
    participants.add_approver("A");
    participants.add_reference("B");
    participants
}

#[tokio::test]
async fn submit_sends_the_report_payload_and_redirects_to_the_approval_main_page() {
    //Arrange
    let mut app = spawn_app().await;
    app.store_token("jwt-writer");
    app.page.set_field(ElementId::TITLE, "T");
    app.page.set_field(ElementId::DETAIL, "D");
    Mock::given(path("/sign/create"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer jwt-writer"))
        .and(body_json(serde_json::json!({
            "type": "REPORT",
            "refList": ["B"],
            "approverList": ["A"],
            "title": "T",
            "detail": "D"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("65f0c2a1"))
        .expect(1)
        .mount(&app.api_server)
        .await;
    let mut composer = ReportComposer::new(&app.context, &app.page, participants());
    composer.init().await;

    //Act
    composer.on_submit().await;

    //Assert
    assert_eq!(app.page.alerts(), vec![Messages::SUBMITTED.to_string()]);
    assert_eq!(app.page.navigations(), vec![app.front_url("/approve/main")]);
}

#[tokio::test]
async fn temp_store_uses_the_temporary_storage_endpoint() {
    //Arrange
    let mut app = spawn_app().await;
    app.store_token("jwt-writer");
    app.page.set_field(ElementId::TITLE, "작성 중");
    app.page.set_field(ElementId::DETAIL, "");
    Mock::given(path("/sign/temporaryStorage"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;
    let composer = ReportComposer::new(&app.context, &app.page, participants());

    //Act
    composer.on_temp_store().await;

    //Assert
    assert_eq!(app.page.alerts(), vec![Messages::TEMP_STORED.to_string()]);
    assert_eq!(app.page.navigations(), vec![app.front_url("/approve/main")]);
}

#[tokio::test]
async fn a_rejected_submission_gives_no_feedback() {
    //Arrange
    let mut app = spawn_app().await;
    app.store_token("jwt-writer");
    app.page.set_field(ElementId::TITLE, "T");
    Mock::given(any())
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&app.api_server)
        .await;
    let composer = ReportComposer::new(&app.context, &app.page, participants());

    //Act
    composer.on_submit().await;

    //Assert
    assert!(app.page.actions().is_empty());
}

#[tokio::test]
async fn submitting_without_a_token_redirects_to_login() {
    //Arrange
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;
    let composer = ReportComposer::new(&app.context, &app.page, participants());

    //Act
    composer.on_submit().await;

    //Assert
    assert_eq!(app.page.alerts(), vec![Messages::LOGIN_REQUIRED.to_string()]);
    assert_eq!(app.page.navigations(), vec![app.front_url("/login")]);
}

#[tokio::test]
async fn missing_fields_are_sent_as_empty_strings() {
    let app = spawn_app().await;
    let composer = ReportComposer::new(&app.context, &app.page, SelectedParticipants::default());

    let template = composer.create_template_data();

    assert_eq!(template.title, "");
    assert_eq!(template.detail, "");
    assert!(template.approver_list.is_empty());
}
