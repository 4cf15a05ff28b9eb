//! End-to-end checks of every route over a real socket.

use std::time::{Duration, Instant};

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn index_returns_ok_regardless_of_request() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .get(server.url("/?cache=bust&n=1"))
        .header("X-Anything", "value")
        .header("Accept", "application/json")
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn data_returns_exact_kib() {
    let server = common::start_server().await;
    let client = common::client();

    for size in [0usize, 1, 2, 17, 1024] {
        let res = client
            .get(server.url(&format!("/data/{size}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "size {size}");
        let body = res.bytes().await.unwrap();
        assert_eq!(body.len(), size * 1024, "size {size}");
    }
}

#[tokio::test]
async fn data_is_identical_across_calls() {
    let server = common::start_server().await;
    let client = common::client();

    let first = client.get(server.url("/data/4")).send().await.unwrap().bytes().await.unwrap();
    let second = client.get(server.url("/data/4")).send().await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);

    // Every KiB is the same seed buffer.
    let chunks: Vec<_> = first.chunks(1024).collect();
    assert!(chunks.windows(2).all(|w| w[0] == w[1]));

    // And a smaller request is a prefix of the larger one.
    let one = client.get(server.url("/data/1")).send().await.unwrap().bytes().await.unwrap();
    assert_eq!(&first[..1024], &one[..]);
}

#[tokio::test]
async fn data_rejects_non_integers() {
    let server = common::start_server().await;
    let client = common::client();

    for size in ["abc", "-1", "1.5", "null"] {
        let res = client
            .get(server.url(&format!("/data/{size}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "size {size}");
        let body = res.text().await.unwrap();
        assert!(!body.is_empty());
        assert!(body.contains(size), "error should name {size:?}: {body}");
    }
}

#[tokio::test]
async fn sleep_waits_at_least_requested_time() {
    let server = common::start_server().await;
    let client = common::client();

    for millis in [0u64, 50, 200] {
        let start = Instant::now();
        let res = client
            .get(server.url(&format!("/sleep/{millis}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "OK");
        assert!(start.elapsed() >= Duration::from_millis(millis));
    }
}

#[tokio::test]
async fn sleep_rejects_non_integers() {
    let server = common::start_server().await;
    let client = common::client();

    for time in ["-1", "abc", "99999999999999999999999"] {
        let res = client
            .get(server.url(&format!("/sleep/{time}")))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "time {time}");
        assert!(!res.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn put_and_post_count_discarded_bytes() {
    let server = common::start_server().await;
    let client = common::client();

    for k in [0usize, 1, 1000, 3 * 1024 * 1024 + 7] {
        let put = client
            .put(server.url("/data/null"))
            .body(vec![b'x'; k])
            .send()
            .await
            .unwrap();
        assert_eq!(put.status(), StatusCode::OK);
        assert_eq!(put.text().await.unwrap(), k.to_string());

        let post = client
            .post(server.url("/data/null"))
            .body(vec![b'y'; k])
            .send()
            .await
            .unwrap();
        assert_eq!(post.status(), StatusCode::OK);
        assert_eq!(post.text().await.unwrap(), k.to_string());
    }
}

#[tokio::test]
async fn discard_without_body() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.post(server.url("/data/null")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "0");
}

#[tokio::test]
async fn discard_streamed_body() {
    let server = common::start_server().await;
    let client = common::client();

    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = (0..64).map(|_| Ok(vec![0u8; 4096])).collect();
    let body = reqwest::Body::wrap_stream(futures_util::stream::iter(chunks));

    let res = client
        .put(server.url("/data/null"))
        .body(body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), (64 * 4096).to_string());
}
