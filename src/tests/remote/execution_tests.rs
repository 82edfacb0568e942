use super::*;

use crate::model::{TextMode, TextPart};

#[test]
fn missing_messages_mean_no_output() {
    let resp: ExecutionResponse = serde_json::from_str(r#"{"path": "/content"}"#).unwrap();
    let exec = Execution::from(resp);
    assert_eq!(exec.session.current_path(), "/content");
    assert!(exec.messages.is_empty());

    let resp: ExecutionResponse =
        serde_json::from_str(r#"{"path": "/", "messages": null}"#).unwrap();
    assert!(Execution::from(resp).messages.is_empty());
}

#[test]
fn reported_path_replaces_the_session() {
    let resp: ExecutionResponse = serde_json::from_value(serde_json::json!({
        "path": "/b",
        "messages": [{"type": "LINE", "parts": [{"mode": "OK", "text": "done"}]}]
    }))
    .unwrap();
    let exec = Execution::from(resp);
    assert_eq!(exec.session, Session::new("/b"));
    assert_eq!(
        exec.messages,
        vec![Message::Line {
            parts: vec![TextPart::new(TextMode::Ok, "done")]
        }]
    );
}

#[test]
fn urls_carry_the_session_path() {
    let client = RemoteClient::new("http://localhost:8080/jcr-shell/rest/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/jcr-shell/rest");
    assert_eq!(
        client.url("execute", &Session::new("/content/docs")).unwrap().as_str(),
        "http://localhost:8080/jcr-shell/rest/execute/content/docs"
    );
    assert_eq!(
        client.url("complete", &Session::default()).unwrap().as_str(),
        "http://localhost:8080/jcr-shell/rest/complete/"
    );
}

#[test]
fn node_names_are_percent_encoded_in_the_path() {
    let client = RemoteClient::new("http://localhost:8080/jcr-shell/rest").unwrap();

    let url = client.url("execute", &Session::new("/content/what?")).unwrap();
    assert_eq!(url.path(), "/jcr-shell/rest/execute/content/what%3F");
    assert_eq!(url.query(), None);

    let url = client.url("execute", &Session::new("/content/a#b")).unwrap();
    assert_eq!(url.path(), "/jcr-shell/rest/execute/content/a%23b");
    assert_eq!(url.fragment(), None);

    let url = client.url("complete", &Session::new("/content/50%off")).unwrap();
    assert_eq!(url.path(), "/jcr-shell/rest/complete/content/50%25off");
}

#[test]
fn encoded_path_survives_the_command_query() {
    let client = RemoteClient::new("http://localhost:8080/jcr-shell/rest").unwrap();
    let url = client.url("execute", &Session::new("/content/a#b")).unwrap();

    let request = client
        .client
        .get(url)
        .query(&[("command", "ls")])
        .build()
        .unwrap();
    assert_eq!(request.url().path(), "/jcr-shell/rest/execute/content/a%23b");
    assert_eq!(request.url().query(), Some("command=ls"));
}
