//! Integration tests for http-load-scenario

use http_load_scenario::prelude::*;
use http_load_scenario::website_user::{record_payload, INDEX, SUBMIT_RECORD, WARM_UP};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::oneshot;

/// Helper to get an available port
fn get_available_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Helper to create an address with an available port
fn get_test_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], get_available_port()))
}

/// Helper to wait for the target to be ready; health probes are not collected
async fn wait_for_target(addr: SocketAddr) {
    let client = reqwest::Client::new();
    for _ in 0..50 {
        if client
            .get(format!("http://{}/healthcheck", addr))
            .timeout(Duration::from_millis(50))
            .send()
            .await
            .is_ok()
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Run `behavior` for `iterations` against a fresh target and return both sides
async fn run_against_target(
    behavior: UserBehavior,
    iterations: usize,
    seed: u64,
) -> (Vec<Outcome>, Vec<ReceivedRequest>) {
    let addr = get_test_addr();
    let expected = behavior.on_start().len() + iterations;

    let user_task = tokio::spawn(async move {
        wait_for_target(addr).await;

        let mut user = SimulatedUser::new(
            behavior,
            Reqwest::new(format!("http://{}", addr)),
            DefaultRecorder::new(),
        )
        .unwrap()
        .with_seed(seed)
        .without_sleeping();

        user.run(iterations).await.unwrap();
        user.into_output()
    });

    let received = Axum::bind(addr)
        .run(expected, DefaultCollector::new(), None::<fn(SocketAddr)>)
        .await
        .unwrap();

    (user_task.await.unwrap(), received)
}

#[tokio::test]
async fn test_single_iteration_hits_root_only() {
    let (outcomes, received) = run_against_target(website_user().unwrap(), 1, 1).await;

    // warm-up request plus one weighted action
    assert_eq!(outcomes.len(), 2);
    assert_eq!(received.len(), 2);
    assert_eq!(outcomes[0].action, WARM_UP);
    assert!([INDEX, SUBMIT_RECORD].contains(&outcomes[1].action.as_str()));

    for outcome in &outcomes {
        assert_eq!(outcome.path, "/");
        assert_eq!(outcome.status, Some(200));
    }
    for request in &received {
        assert_eq!(request.path, "/");
        assert!(matches!(request.method, Method::Get | Method::Post));
    }
}

#[tokio::test]
async fn test_post_body_is_the_record() {
    let (outcomes, received) = run_against_target(website_user().unwrap(), 40, 7).await;

    assert_eq!(outcomes.len(), 41);
    assert!(outcomes.iter().all(Outcome::is_success));

    let posts: Vec<_> = received
        .iter()
        .filter(|r| r.method == Method::Post)
        .collect();
    assert!(!posts.is_empty());
    for post in posts {
        assert_eq!(post.body_as_json().unwrap(), record_payload());
        assert!(post.headers["content-type"].contains("application/json"));
    }

    for get in received.iter().filter(|r| r.method == Method::Get) {
        assert!(get.body.is_empty());
    }
}

#[tokio::test]
async fn test_outcomes_match_received_requests() {
    let (outcomes, received) = run_against_target(website_user().unwrap(), 15, 21).await;

    assert_eq!(outcomes.len(), received.len());
    for (outcome, request) in outcomes.iter().zip(received.iter()) {
        assert_eq!(outcome.method, request.method);
        assert_eq!(outcome.path, request.path);
    }
}

#[tokio::test]
async fn test_rejected_post_status_is_recorded() {
    let behavior = BehaviorBuilder::new("broken")
        .action(Action::post("empty_record", "/").with_json(&json!({"payload": "missing data"})))
        .build()
        .unwrap();

    let (outcomes, received) = run_against_target(behavior, 3, 0).await;

    assert_eq!(received.len(), 3);
    assert!(outcomes.iter().all(|o| o.status == Some(400)));
    assert!(outcomes.iter().all(|o| !o.is_success()));
}

#[tokio::test]
async fn test_unknown_path_is_collected() {
    let behavior = BehaviorBuilder::new("lost")
        .action(Action::get("about", "/about/"))
        .build()
        .unwrap();

    let (outcomes, received) = run_against_target(behavior, 2, 0).await;

    assert_eq!(received.len(), 2);
    assert!(received.iter().all(|r| r.path == "/about/"));
    assert!(outcomes.iter().all(|o| o.status == Some(404)));
}

#[tokio::test]
async fn test_target_reports_bound_address() {
    let (ready_tx, ready_rx) = oneshot::channel();

    let target = tokio::spawn(async move {
        Axum::default()
            .run(
                1,
                DefaultCollector::new(),
                Some(move |addr: SocketAddr| {
                    let _ = ready_tx.send(addr);
                }),
            )
            .await
    });

    let addr = ready_rx.await.unwrap();
    assert_ne!(addr.port(), 0);

    let status = reqwest::Client::new()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap()
        .status();
    assert_eq!(status, 200);

    let received = target.await.unwrap().unwrap();
    assert_eq!(received.len(), 1);
}

#[tokio::test]
async fn test_healthcheck_is_not_collected() {
    let addr = get_test_addr();

    let requests_task = tokio::spawn(async move {
        wait_for_target(addr).await;
        let client = reqwest::Client::new();

        let health = client
            .get(format!("http://{}/healthcheck", addr))
            .send()
            .await
            .unwrap();
        assert_eq!(health.status(), 200);

        client
            .post(format!("http://{}/", addr))
            .json(&record_payload())
            .send()
            .await
            .unwrap()
    });

    let received = Axum::bind(addr)
        .run(1, DefaultCollector::new(), None::<fn(SocketAddr)>)
        .await
        .unwrap();

    let response = requests_task.await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, Method::Post);
}

#[tokio::test]
async fn test_concurrent_users_share_a_target() {
    let addr = get_test_addr();
    let users = 3;
    let iterations = 4;

    let users_task = tokio::spawn(async move {
        wait_for_target(addr).await;
        let runs = (0..users).map(|seed| async move {
            let mut user = SimulatedUser::new(
                website_user().unwrap(),
                Reqwest::new(format!("http://{}", addr)),
                DefaultRecorder::new(),
            )
            .unwrap()
            .with_seed(seed)
            .without_sleeping();
            user.run(iterations).await.unwrap();
            user.into_output()
        });
        futures::future::join_all(runs).await
    });

    let received = Axum::bind(addr)
        .run(
            users as usize * (1 + iterations),
            DefaultCollector::new(),
            None::<fn(SocketAddr)>,
        )
        .await
        .unwrap();

    let outcomes = users_task.await.unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.len() == 1 + iterations));
    assert_eq!(received.len(), 15);
    assert!(received.iter().all(|r| r.path == "/"));
}
