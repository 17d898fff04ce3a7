#![allow(missing_docs)]

use ocirest_core::database::{ListDbHomePatchesRequest, PatchAction, PatchLifecycleState};
use ocirest_core::{ErrorKind, ListResponse};
use rstest::rstest;

mod common;
pub use self::common::*;

const PATCHED_HOME: &str = "ocid1.dbhome.oc1..patched";
const EMPTY_HOME: &str = "ocid1.dbhome.oc1..empty";

#[rstest]
#[tokio::test]
async fn test_paginate_in_server_order(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    let database = app.database();
    let mut request = ListDbHomePatchesRequest::new(PATCHED_HOME).with_limit(2);
    let mut ids = vec![];
    let mut cursors = vec![];

    loop {
        let page = database.list_db_home_patches(request.clone()).await?;
        ids.extend(page.items().iter().map(|it| it.id.clone()));
        match page.next_page() {
            Some(cursor) => {
                cursors.push(cursor.to_string());
                request = request.with_page(cursor);
            }
            None => break,
        }
    }

    insta::assert_debug_snapshot!(ids, @r#"
    [
        "ocid1.dbpatch.oc1..p1",
        "ocid1.dbpatch.oc1..p2",
        "ocid1.dbpatch.oc1..p3",
        "ocid1.dbpatch.oc1..p4",
        "ocid1.dbpatch.oc1..p5",
    ]
    "#);
    assert_eq!(cursors, ["offset-2", "offset-4"]);

    let queries = app
        .requests()
        .await?
        .into_iter()
        .map(|it| it.query.unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(
        queries,
        ["limit=2", "limit=2&page=offset-2", "limit=2&page=offset-4"]
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_patch_fields(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let page = app
        .database()
        .list_db_home_patches(ListDbHomePatchesRequest::new(PATCHED_HOME))
        .await?;

    let [p1, p2, p3, p4, p5] = page.items.as_slice() else {
        panic!("expected five patches, got {:?}", page.items);
    };
    assert_eq!(
        p1.available_actions,
        Some(vec![PatchAction::Apply, PatchAction::Precheck])
    );
    assert_eq!(p1.last_action, None);
    assert_eq!(p2.available_actions, Some(vec![]));
    assert_eq!(p2.lifecycle_state, Some(PatchLifecycleState::Success));
    assert_eq!(
        p3.lifecycle_details.as_deref(),
        Some("precheck failed: insufficient space")
    );
    assert_eq!(
        p4.last_action,
        Some(PatchAction::Unknown("ROLLBACK".to_string()))
    );
    assert_eq!(p5.available_actions, None);
    assert_eq!(p5.lifecycle_state, None);
    assert_eq!(page.opc_next_page, None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_empty_home_has_no_cursor(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let page = app
        .database()
        .list_db_home_patches(ListDbHomePatchesRequest::new(EMPTY_HOME).with_limit(10))
        .await?;

    assert!(page.items().is_empty());
    assert_eq!(page.next_page(), None);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_unknown_home_keeps_status(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let error = app
        .database()
        .list_db_home_patches(ListDbHomePatchesRequest::new("ocid1.dbhome.oc1..unknown"))
        .await
        .expect_err("unknown home");

    assert_eq!(error.kind(), ErrorKind::Service);
    assert_eq!(error.status_code(), Some(404));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_missing_home_sends_nothing(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let error = app
        .database()
        .list_db_home_patches(ListDbHomePatchesRequest::new(""))
        .await
        .expect_err("missing home");

    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert!(app.requests().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn test_request_id_header(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;
    let request = ListDbHomePatchesRequest::new(EMPTY_HOME).with_opc_request_id("trace-42");

    let page = app.database().list_db_home_patches(request).await?;

    assert_eq!(page.opc_request_id.as_deref(), Some("trace-42"));
    let requests = app.requests().await?;
    let recorded = requests.first().expect("one request");
    assert_eq!(
        recorded.headers.get("opc-request-id").map(String::as_str),
        Some("trace-42")
    );
    Ok(())
}
