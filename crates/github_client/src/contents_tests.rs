use super::*;
use serde_json::{from_str, json, to_value};

#[test]
fn test_create_file_payload_encodes_content() {
    let payload = CreateFilePayload::new("Add default README", "# demo\n");

    assert_eq!(payload.message, "Add default README");
    assert_eq!(payload.content, "IyBkZW1vCg==");
}

#[test]
fn test_create_file_payload_serializes_message_and_content() {
    let payload = CreateFilePayload::new("msg", "body");

    let body = to_value(&payload).expect("Failed to serialize CreateFilePayload");

    assert_eq!(body, json!({ "message": "msg", "content": "Ym9keQ==" }));
}

#[test]
fn test_file_content_deserialization_ignores_extra_fields() {
    let json_str = r#"{
        "type": "file",
        "encoding": "base64",
        "size": 42,
        "name": "README.md",
        "path": "README.md",
        "content": "IyBkZW1vCg==",
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "url": "https://api.github.com/repos/octo/demo/contents/README.md"
    }"#;

    let file: FileContent = from_str(json_str).expect("Failed to deserialize FileContent");

    assert_eq!(file.name, "README.md");
    assert_eq!(file.path, "README.md");
    assert_eq!(file.sha, "3d21ec53a331a6f037a91c368710b99387d012c1");
    assert_eq!(file.size, 42);
}
