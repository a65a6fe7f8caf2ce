use tasklist_core::{Record, Tag, TagValidationError, Task, TaskStatus, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("  Buy milk  ").unwrap();

    assert!(!task.uuid.is_nil());
    assert_eq!(task.name, "Buy milk");
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.tags.is_empty());
}

#[test]
fn with_id_rejects_nil_uuid_and_blank_name() {
    assert_eq!(
        Task::with_id(Uuid::nil(), "x").unwrap_err(),
        TaskValidationError::NilUuid
    );
    assert_eq!(Task::new("   ").unwrap_err(), TaskValidationError::BlankName);
}

#[test]
fn validate_rejects_repeated_tags_set_directly() {
    let mut task = Task::new("x").unwrap();
    let tag = Tag::new("dup").unwrap();
    task.tags = vec![tag.clone(), tag];

    assert_eq!(
        task.validate().unwrap_err(),
        TaskValidationError::DuplicateTag("dup".to_string())
    );
}

#[test]
fn tags_are_equivalent_after_normalization() {
    let upper = Tag::new("WORK").unwrap();
    let lower = Tag::new("work").unwrap();
    assert!(upper.is_equivalent(&lower));
    assert!(matches!(
        Tag::new("a/b"),
        Err(TagValidationError::InvalidCharacters(_))
    ));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "Ship release")
        .unwrap()
        .with_tags([Tag::new("work").unwrap()]);
    task.mark_done();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["uuid"], task_id.to_string());
    assert_eq!(json["name"], "Ship release");
    assert_eq!(json["status"], "done");
    assert_eq!(json["tags"], serde_json::json!(["work"]));

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_blank_name_and_bad_tags() {
    let blank = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "  ",
    });
    let err = serde_json::from_value::<Task>(blank).unwrap_err();
    assert!(
        err.to_string().contains("task name must not be blank"),
        "unexpected error: {err}"
    );

    let bad_tag = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "x",
        "tags": ["has space"],
    });
    assert!(serde_json::from_value::<Task>(bad_tag).is_err());
}

#[test]
fn deserialize_defaults_status_and_tags() {
    let minimal = serde_json::json!({
        "uuid": "11111111-2222-4333-8444-555555555555",
        "name": "x",
    });
    let task: Task = serde_json::from_value(minimal).unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(task.tags.is_empty());
}
