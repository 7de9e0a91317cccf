//! Integration test: real curl fetcher and file writer against a local server.
//!
//! Requests are built for the public service host and redirected to the local
//! server by a thin fetcher wrapper, so the full encode → fetch → write path runs.

mod common;

use robohash_core::config::RoboHashConfig;
use robohash_core::fetch::{CurlFetcher, FetchBytes, FetchError};
use robohash_core::storage::{FileWriter, FsProbe};
use robohash_core::url_encoder::{DOMAIN, PROTOCOL};
use robohash_core::{BackgroundSet, ImageExtension, ImageSet, RequestConfig, RoboHashClient, RoboHashError};
use tempfile::tempdir;

fn png_body() -> Vec<u8> {
    let mut body = b"\x89PNG\r\n\x1a\n".to_vec();
    body.extend((0u8..200).cycle().take(4096));
    body
}

/// Sends service URLs to the local server instead.
struct LocalFetcher {
    inner: CurlFetcher,
    base_url: String,
}

impl FetchBytes for LocalFetcher {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let service = format!("{}://{}/", PROTOCOL, DOMAIN);
        let local = url.replacen(&service, &self.base_url, 1);
        self.inner.fetch_bytes(&local)
    }
}

fn client(base_url: &str) -> RoboHashClient<LocalFetcher, FileWriter, FsProbe> {
    let cfg = RoboHashConfig {
        connect_timeout_secs: 2,
        timeout_secs: 5,
        ..RoboHashConfig::default()
    };
    RoboHashClient::with_parts(
        LocalFetcher {
            inner: CurlFetcher::from_config(&cfg),
            base_url: base_url.to_string(),
        },
        FileWriter,
        FsProbe,
    )
}

#[test]
fn save_writes_fetched_bytes_and_requests_encoded_url() {
    let body = png_body();
    let server = common::image_server::start(body.clone());
    let dir = tempdir().unwrap();
    let dest = dir.path().join("robot.png");

    let mut config = RequestConfig::new("nathan-v-cheshire").unwrap();
    config
        .add_image_sets(&[ImageSet::Monsters, ImageSet::Humans])
        .unwrap()
        .set_background_set(BackgroundSet::SpiralAndPatterns)
        .set_size(701, 701)
        .unwrap();

    client(&server.base_url).save_to_file(&config, &dest).unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), body);
    assert_eq!(
        server.requests(),
        vec!["/nathan-v-cheshire.png?sets=2,5&bgset=bg2&size=701x701".to_string()]
    );
}

#[test]
fn existing_destination_is_rejected_before_fetching() {
    let server = common::image_server::start(png_body());
    let dir = tempdir().unwrap();
    let dest = dir.path().join("taken.png");
    std::fs::write(&dest, b"keep me").unwrap();

    let config = RequestConfig::new("taken").unwrap();
    let err = client(&server.base_url)
        .save_to_file(&config, &dest)
        .unwrap_err();

    assert!(matches!(err, RoboHashError::InvalidArgument(_)));
    assert_eq!(std::fs::read(&dest).unwrap(), b"keep me");
    assert!(server.requests().is_empty());
}

#[test]
fn directory_destination_is_rejected() {
    let server = common::image_server::start(png_body());
    let dir = tempdir().unwrap();
    let config = RequestConfig::new("dir").unwrap();
    let err = client(&server.base_url)
        .save_to_file(&config, dir.path())
        .unwrap_err();
    assert!(matches!(err, RoboHashError::InvalidArgument(_)));
}

#[test]
fn http_error_maps_to_fetch_error_and_writes_nothing() {
    let server = common::image_server::start(png_body());
    let dir = tempdir().unwrap();
    let dest = dir.path().join("missing.png");

    let config = RequestConfig::new("missing").unwrap();
    let err = client(&server.base_url)
        .save_to_file(&config, &dest)
        .unwrap_err();

    match err {
        RoboHashError::Fetch { source, .. } => assert!(matches!(source, FetchError::Http(404))),
        other => panic!("expected Fetch, got {:?}", other),
    }
    assert!(!dest.exists());
}

#[test]
fn non_image_body_is_rejected() {
    let server = common::image_server::start(png_body());
    let mut config = RequestConfig::new("html-page").unwrap();
    config.set_image_extension(ImageExtension::Jpg);

    let err = client(&server.base_url).get_image_bytes(&config).unwrap_err();
    match err {
        RoboHashError::Fetch { source, .. } => assert!(matches!(source, FetchError::NotAnImage)),
        other => panic!("expected Fetch, got {:?}", other),
    }
}

#[test]
fn oversized_body_is_rejected() {
    let server = common::image_server::start(png_body());
    let fetcher = CurlFetcher::from_config(&RoboHashConfig {
        max_image_bytes: 100,
        ..RoboHashConfig::default()
    });
    let err = fetcher
        .fetch_bytes(&format!("{}big.png", server.base_url))
        .unwrap_err();
    assert!(matches!(err, FetchError::TooLarge { limit: 100 }));
}

#[test]
fn connection_refused_is_curl_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = CurlFetcher::default()
        .fetch_bytes(&format!("http://127.0.0.1:{}/k.png", port))
        .unwrap_err();
    assert!(matches!(err, FetchError::Curl(_)));
}
