use tests::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn create_injects_the_subject_column() {
    let (mapper, _store, ops) = mapper_with_subject(secured_blog_schema(), Some("u1"));

    mapper.create(&new_post("x")).await.unwrap();

    let recorded = ops.lock().unwrap();
    let Some(Operation::Insert(insert)) = recorded.first() else {
        panic!("expected an insert, got {recorded:?}");
    };
    assert_eq!(insert.row.get("user_id"), Some(&Value::from("u1")));
    assert_eq!(insert.row.get("title"), Some(&Value::from("x")));
    // Timestamps are backend-managed; the outgoing row never carries them.
    assert!(!insert.row.contains("created_at"));
    assert!(!insert.row.contains("updated_at"));
}

#[tokio::test]
async fn create_overwrites_a_caller_supplied_access_value() {
    let (mapper, _store, ops) = mapper_with_subject(secured_blog_schema(), Some("u1"));

    let mut record = new_post("x");
    record.set_attribute("userId", "someone-else");
    mapper.create(&record).await.unwrap();

    let recorded = ops.lock().unwrap();
    let Some(Operation::Insert(insert)) = recorded.first() else {
        panic!("expected an insert, got {recorded:?}");
    };
    assert_eq!(insert.row.get("user_id"), Some(&Value::from("u1")));
}

#[tokio::test]
async fn reads_are_scoped_to_the_subject() {
    let (mapper, store, ops) = mapper_with_subject(secured_blog_schema(), Some("u1"));

    seed_row(&store, "posts", &[("id", "p1"), ("user_id", "u1")]);
    seed_row(&store, "posts", &[("id", "p2"), ("user_id", "u2")]);

    let all = mapper.find_all("post").await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(Value::from("p1")));

    // The filter is part of the issued request, not applied afterwards.
    let recorded = ops.lock().unwrap();
    let Some(Operation::Query(query)) = recorded.first() else {
        panic!("expected a query, got {recorded:?}");
    };
    assert_eq!(query.filter_on("user_id"), Some(&Value::from("u1")));
}

#[tokio::test]
async fn single_row_reads_outside_scope_stay_invisible() {
    let (mapper, store, _ops) = mapper_with_subject(secured_blog_schema(), Some("u1"));

    seed_row(&store, "posts", &[("id", "p2"), ("user_id", "u2")]);

    // The row exists but belongs to another subject; its existence must
    // not leak.
    assert_eq!(mapper.find_one("post", "p2").await.unwrap(), None);
}

#[tokio::test]
async fn missing_subject_fails_before_any_backend_call() {
    let (mapper, _store, ops) = mapper_with_subject(secured_blog_schema(), None);

    let err = mapper.find_all("post").await.unwrap_err();
    assert!(err.is_missing_subject());

    let err = mapper.create(&new_post("x")).await.unwrap_err();
    assert!(err.is_missing_subject());

    assert!(ops.lock().unwrap().is_empty());
}

#[tokio::test]
async fn per_model_override_disables_enforcement() {
    let schema = Schema::builder()
        .access_control(true)
        .model("tag", |m| {
            m.access_enabled(false);
        })
        .build();
    let (mapper, _store, ops) = mapper_with_subject(schema, None);

    // No subject resolvable, but the model opted out.
    assert!(mapper.find_all("tag").await.unwrap().is_empty());
    assert_eq!(recorded_tables(&ops), vec!["tags"]);
}

#[tokio::test]
async fn access_column_is_never_deserialized() {
    let (mapper, store, _ops) = mapper_with_subject(secured_blog_schema(), Some("u1"));

    seed_row(&store, "posts", &[("id", "p1"), ("user_id", "u1"), ("title", "x")]);

    let record = mapper.find_one("post", "p1").await.unwrap().unwrap();
    assert_eq!(record.attribute("userId"), None);
    assert_eq!(record.attribute("title"), Some(&Value::from("x")));
}
