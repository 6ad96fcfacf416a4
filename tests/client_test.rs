//! Client tests against a recording mock transport
//!
//! Each test checks the method name and parameters the client sends and
//! how it unwraps the canned response.

mod common;

use common::{LogBuffer, MockTransport};
use telegraph_rs::{
    AccountField, CreateAccountOptions, EditAccountOptions, Element, Node, PageListOptions,
    PageOptions, TelegraphClient, TelegraphError, UploadFile, ViewsQuery,
};

fn client_with(transport: MockTransport) -> TelegraphClient<MockTransport> {
    let mut client = TelegraphClient::with_transport(transport);
    client.set_access_token("test-token");
    client
}

#[tokio::test]
async fn test_create_account() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"short_name":"Sandbox","author_name":"Anonymous","author_url":"","access_token":"new-token","auth_url":"https://edit.telegra.ph/auth/x"}}"#,
    );
    let client = TelegraphClient::with_transport(transport);

    let account = client
        .create_account(
            "Sandbox",
            &CreateAccountOptions::default().author_name("Anonymous"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(account.access_token.as_deref(), Some("new-token"));
    // Creating an account does not need or change the client's token
    assert!(client.access_token().is_none());

    let call = client.transport().last_call();
    assert_eq!(call.method, "createAccount");
    assert_eq!(call.params.names(), vec!["short_name", "author_name"]);
    assert!(!call.params.contains("access_token"));
}

#[tokio::test]
async fn test_edit_account_info() {
    let transport = MockTransport::new()
        .respond(r#"{"ok":true,"result":{"short_name":"Renamed","author_name":"A","author_url":""}}"#);
    let client = client_with(transport);

    let account = client
        .edit_account_info(&EditAccountOptions::default().short_name("Renamed"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.short_name, "Renamed");

    let call = client.transport().last_call();
    assert_eq!(call.method, "editAccountInfo");
    assert_eq!(call.params.get("access_token"), Some("test-token"));
    assert_eq!(call.params.get("short_name"), Some("Renamed"));
}

#[tokio::test]
async fn test_get_account_info_fields() {
    let transport =
        MockTransport::new().respond(r#"{"ok":true,"result":{"short_name":"Sandbox","page_count":3}}"#);
    let client = client_with(transport);

    let account = client
        .get_account_info(&[AccountField::ShortName, AccountField::PageCount])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.page_count, Some(3));
    assert_eq!(account.author_name, "");

    let call = client.transport().last_call();
    assert_eq!(call.method, "getAccountInfo");
    assert_eq!(call.params.get("fields"), Some(r#"["short_name","page_count"]"#));
}

#[tokio::test]
async fn test_revoke_access_token_then_switch() {
    let transport = MockTransport::new()
        .respond(r#"{"ok":true,"result":{"short_name":"S","author_name":"","author_url":"","access_token":"rotated"}}"#)
        .respond(r#"{"ok":true,"result":{"total_count":0,"pages":[]}}"#);
    let mut client = client_with(transport);

    let account = client.revoke_access_token().await.unwrap().unwrap();
    assert_eq!(client.transport().last_call().params.get("access_token"), Some("test-token"));

    client.set_access_token(account.access_token.unwrap());
    client.get_page_list(&PageListOptions::default()).await.unwrap();
    assert_eq!(client.transport().last_call().params.get("access_token"), Some("rotated"));
}

#[tokio::test]
async fn test_create_page_sends_encoded_content() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"path":"Title-10-18","url":"https://telegra.ph/Title-10-18","title":"Title","description":"","content":[{"tag":"p","children":["hello world"]}],"views":0,"can_edit":true}}"#,
    );
    let client = client_with(transport);
    let content: Vec<Node> = vec![Element::new("p").child("hello world").into()];

    let page = client
        .create_page(
            "Title",
            &content,
            &PageOptions::default()
                .author_name("Author")
                .return_content(true),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.path, "Title-10-18");
    assert_eq!(page.content.as_deref(), Some(content.as_slice()));
    assert_eq!(page.can_edit, Some(true));

    let call = client.transport().last_call();
    assert_eq!(call.method, "createPage");
    assert_eq!(
        call.params.names(),
        vec!["access_token", "title", "content", "author_name", "return_content"]
    );
    assert_eq!(
        call.params.get("content"),
        Some(r#"[{"tag":"p","children":["hello world"]}]"#)
    );
}

#[tokio::test]
async fn test_edit_page() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"path":"Title-10-18","url":"https://telegra.ph/Title-10-18","title":"New","description":""}}"#,
    );
    let client = client_with(transport);

    let page = client
        .edit_page("Title-10-18", "New", &[Node::text("x")], &PageOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(page.title, "New");
    assert!(page.content.is_none());

    let call = client.transport().last_call();
    assert_eq!(call.method, "editPage");
    assert_eq!(call.params.get("path"), Some("Title-10-18"));
    assert_eq!(call.params.get("content"), Some(r#"["x"]"#));
}

#[tokio::test]
async fn test_get_page_without_token() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"path":"p","url":"https://telegra.ph/p","title":"T","description":"","content":["a",{"tag":"br"}]}}"#,
    );
    let client = TelegraphClient::with_transport(transport);

    let page = client.get_page("p", true).await.unwrap().unwrap();
    assert_eq!(
        page.content,
        Some(vec![Node::text("a"), Node::element("br")])
    );

    let call = client.transport().last_call();
    assert_eq!(call.method, "getPage");
    assert_eq!(call.params.names(), vec!["path", "return_content"]);
}

#[tokio::test]
async fn test_get_page_list() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"total_count":12,"pages":[{"path":"A","url":"https://telegra.ph/A","title":"A","description":"","views":5}]}}"#,
    );
    let client = client_with(transport);

    let list = client
        .get_page_list(&PageListOptions::default().offset(10).limit(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(list.total_count, 12);
    assert_eq!(list.pages[0].views, Some(5));

    let call = client.transport().last_call();
    assert_eq!(call.method, "getPageList");
    assert_eq!(call.params.get("offset"), Some("10"));
    assert_eq!(call.params.get("limit"), Some("1"));
}

#[tokio::test]
async fn test_get_views() {
    let transport = MockTransport::new().respond(r#"{"ok":true,"result":{"views":40}}"#);
    let client = TelegraphClient::with_transport(transport);

    let views = client
        .get_views("p", &ViewsQuery::year(2024).month(3).day(14).hour(9))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(views.views, 40);

    let call = client.transport().last_call();
    assert_eq!(call.method, "getViews");
    assert_eq!(call.params.names(), vec!["path", "year", "month", "day", "hour"]);
}

#[tokio::test]
async fn test_invalid_views_query_sends_nothing() {
    let client = TelegraphClient::with_transport(MockTransport::new());

    let err = client
        .get_views("p", &ViewsQuery::year(2024).day(3))
        .await
        .unwrap_err();
    assert!(matches!(err, TelegraphError::InvalidArgument(_)));
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let client = TelegraphClient::with_transport(MockTransport::new());

    let err = client
        .create_page("T", &[Node::text("x")], &PageOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TelegraphError::MissingAccessToken));

    assert!(client.get_account_info(&[]).await.is_err());
    assert!(client.revoke_access_token().await.is_err());
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn test_service_error_verbatim() {
    let transport = MockTransport::new().respond(r#"{"ok":false,"error":"PAGE_NOT_FOUND"}"#);
    let client = TelegraphClient::with_transport(transport);

    let err = client.get_page("missing", false).await.unwrap_err();
    match err {
        TelegraphError::Service { message } => assert_eq!(message, "PAGE_NOT_FOUND"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_result() {
    let transport = MockTransport::new().respond(r#"{"ok":true}"#);
    let client = client_with(transport);

    let result = client.get_account_info(&[]).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let transport = MockTransport::new().respond("502 Bad Gateway");
    let client = TelegraphClient::with_transport(transport);

    let err = client.get_page("p", false).await.unwrap_err();
    assert!(matches!(err, TelegraphError::EnvelopeParse(_)));
}

#[tokio::test]
async fn test_malformed_page_content_is_decode_error() {
    let transport = MockTransport::new().respond(
        r#"{"ok":true,"result":{"path":"p","url":"u","title":"T","description":"","content":[42]}}"#,
    );
    let client = TelegraphClient::with_transport(transport);

    let err = client.get_page("p", true).await.unwrap_err();
    assert!(matches!(err, TelegraphError::Decode(_)));
}

#[tokio::test]
async fn test_upload() {
    let transport =
        MockTransport::new().respond(r#"[{"src":"/file/one.png"},{"src":"/file/two.jpg"}]"#);
    let client = TelegraphClient::with_transport(transport);
    let files = vec![
        UploadFile::new("one.png", vec![1, 2, 3]),
        UploadFile::new("two.jpg", vec![4, 5]),
    ];

    let paths = client.upload(&files).await.unwrap();
    assert_eq!(paths, vec!["/file/one.png", "/file/two.jpg"]);
    assert_eq!(client.transport().uploads(), vec![files]);
}

#[tokio::test]
async fn test_upload_rejected() {
    let transport = MockTransport::new().respond(r#"{"error":"File type invalid"}"#);
    let client = TelegraphClient::with_transport(transport);

    let err = client
        .upload(&[UploadFile::new("notes.txt", b"hi".to_vec())])
        .await
        .unwrap_err();
    assert_eq!(err.service_message(), Some("file type invalid"));
}

#[tokio::test]
async fn test_upload_nothing() {
    let client = TelegraphClient::with_transport(MockTransport::new());
    let err = client.upload(&[]).await.unwrap_err();
    assert!(matches!(err, TelegraphError::InvalidArgument(_)));
    assert!(client.transport().uploads().is_empty());
}

#[tokio::test]
async fn test_clones_share_transport() {
    let transport = MockTransport::new()
        .respond(r#"{"ok":true,"result":{"views":1}}"#)
        .respond(r#"{"ok":true,"result":{"views":2}}"#);
    let client = TelegraphClient::with_transport(transport);
    let other = client.clone();

    let query_a = ViewsQuery::total();
    let query_b = ViewsQuery::total();
    let (a, b) = tokio::join!(
        client.get_views("a", &query_a),
        other.get_views("b", &query_b)
    );
    let mut views = vec![a.unwrap().unwrap().views, b.unwrap().unwrap().views];
    views.sort();
    assert_eq!(views, vec![1, 2]);
    assert_eq!(client.transport().calls().len(), 2);
}

#[tokio::test]
async fn test_no_success_log_without_result() {
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let transport = MockTransport::new()
        .respond(r#"{"ok":true}"#)
        .respond(r#"{"ok":true}"#)
        .respond(r#"{"ok":true,"result":{"short_name":"Sandbox","access_token":"t"}}"#);
    let client = client_with(transport);

    let account = client
        .create_account("Sandbox", &CreateAccountOptions::default())
        .await
        .unwrap();
    assert!(account.is_none());
    let page = client
        .edit_page("p", "T", &[Node::text("x")], &PageOptions::default())
        .await
        .unwrap();
    assert!(page.is_none());
    assert!(!logs.contents().contains("Created account"), "{}", logs.contents());
    assert!(!logs.contents().contains("Edited page"), "{}", logs.contents());

    client
        .create_account("Sandbox", &CreateAccountOptions::default())
        .await
        .unwrap();
    assert!(logs.contents().contains("Created account Sandbox"));
}
