use outcome_rail::async_ext::{RequestScope, TaskLocalRequests};
use outcome_rail::response::{
    ContextAwareProfile, RequestAccessor, RequestInfo, ResultTransformer, ServiceInfo,
};
use outcome_rail::types::{Error, Outcome};

fn request(path: &str) -> RequestInfo {
    RequestInfo {
        method: "GET".into(),
        path: Some(path.into()),
        request_identifier: format!("id{}", path),
        ..RequestInfo::default()
    }
}

#[tokio::test]
async fn scope_is_visible_across_awaits() {
    let seen = RequestScope::scope(request("/a"), async {
        tokio::task::yield_now().await;
        TaskLocalRequests.current_request().map(|r| r.path)
    })
    .await;

    assert_eq!(seen, Some(Some("/a".to_owned())));
    assert!(RequestScope::current().is_none());
}

#[tokio::test]
async fn concurrent_tasks_see_their_own_request() {
    let tasks: Vec<_> = ["/x", "/y", "/z"]
        .into_iter()
        .map(|path| {
            tokio::spawn(RequestScope::scope(request(path), async {
                tokio::task::yield_now().await;
                RequestScope::current().and_then(|r| r.path)
            }))
        })
        .collect();

    let mut paths = Vec::new();
    for task in tasks {
        paths.push(task.await.unwrap());
    }
    assert_eq!(paths, [Some("/x".to_owned()), Some("/y".to_owned()), Some("/z".to_owned())]);
}

#[tokio::test]
async fn context_aware_profile_reads_the_scoped_request() {
    let profile = ContextAwareProfile::new(TaskLocalRequests, ServiceInfo::new("orders", "api"));
    let outcome = Outcome::<()>::failure(Error::new("x"));

    let response = RequestScope::scope(request("/orders/1"), async {
        ResultTransformer::new().transform(&outcome, &profile)
    })
    .await;
    let problem = response.problem_document().unwrap();

    assert_eq!(problem.extension("endpoint").unwrap(), "/orders/1");
    assert_eq!(problem.extension("traceId").unwrap(), "id/orders/1");
}
