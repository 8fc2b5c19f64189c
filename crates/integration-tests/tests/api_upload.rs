//! Integration tests for the image upload endpoint.

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};

use stickerfly_integration_tests::{base_url, signed_up_client};

fn png_form(bytes: Vec<u8>) -> Form {
    Form::new().part(
        "file",
        Part::bytes(bytes)
            .file_name("art.png")
            .mime_str("image/png")
            .expect("valid mime"),
    )
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn valid_upload_returns_a_public_url() {
    let (client, _) = signed_up_client().await;

    let resp = client
        .post(format!("{}/api/upload", base_url()))
        .multipart(png_form(vec![0x89, 0x50, 0x4e, 0x47]))
        .send()
        .await
        .expect("upload failed");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = resp.json().await.expect("invalid JSON");
    let url = body["url"].as_str().expect("url field");
    assert!(url.starts_with("/uploads/"), "{url}");

    // The uploaded file is served back.
    let file = client
        .get(format!("{}{url}", base_url()))
        .send()
        .await
        .expect("fetch failed");
    assert_eq!(file.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn disallowed_type_is_rejected() {
    let (client, _) = signed_up_client().await;

    let form = Form::new().part(
        "file",
        Part::bytes(vec![1, 2, 3])
            .file_name("evil.exe")
            .mime_str("application/octet-stream")
            .expect("valid mime"),
    );

    let resp = client
        .post(format!("{}/api/upload", base_url()))
        .multipart(form)
        .send()
        .await
        .expect("upload failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn oversized_upload_is_rejected() {
    let (client, _) = signed_up_client().await;

    let resp = client
        .post(format!("{}/api/upload", base_url()))
        .multipart(png_form(vec![0u8; 5 * 1024 * 1024 + 1]))
        .send()
        .await
        .expect("upload failed");
    assert!(
        resp.status() == StatusCode::BAD_REQUEST
            || resp.status() == StatusCode::PAYLOAD_TOO_LARGE,
        "got {}",
        resp.status()
    );
}
