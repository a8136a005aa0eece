use crate::{Comment, CoreError};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok, pat};
use serde_json::json;

#[test]
fn given_object_when_from_value_then_ok_and_payload_kept() {
    let result = Comment::from_value(json!({"id": 7, "text": "Hello", "rating": 5}));

    assert_that!(result, ok(anything()));
    let comment = result.unwrap();
    assert_eq!(comment.id(), Some(&json!(7)));
    assert_eq!(comment.get("text"), Some(&json!("Hello")));
    assert_eq!(comment.payload().len(), 3);
}

#[test]
fn given_array_when_from_value_then_json_error() {
    let result = Comment::from_value(json!(["not", "an", "object"]));

    assert_that!(result, err(pat!(CoreError::Json { .. })));
}

#[test]
fn given_comment_without_id_when_id_then_none() {
    let comment = Comment::from_value(json!({"text": "draft"})).unwrap();

    assert!(comment.id().is_none());
}

#[test]
fn given_comment_when_serialize_then_plain_object() {
    let comment = Comment::from_value(json!({"text": "Hi"})).unwrap();

    let value = serde_json::to_value(&comment).unwrap();

    assert_eq!(value, json!({"text": "Hi"}));
}
