use tests::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn table_override_is_always_used() {
    let schema = Schema::builder()
        .model("post", |m| {
            m.table("blog_posts");
        })
        .build();
    let (mapper, _store, ops) = mapper_with(schema);

    mapper.find_all("post").await.unwrap();
    mapper.create(&new_post("x")).await.unwrap();

    let tables = recorded_tables(&ops);
    assert_eq!(tables, vec!["blog_posts", "blog_posts"]);
}

#[tokio::test]
async fn default_table_name_is_the_pluralized_model() {
    let schema = Schema::builder().model("category", |_| {}).build();
    let (mapper, _store, ops) = mapper_with(schema);

    mapper.find_all("category").await.unwrap();
    assert_eq!(recorded_tables(&ops), vec!["categories"]);
}

#[tokio::test]
async fn caller_supplied_name_resolver_governs_table_names() {
    let schema = Schema::builder()
        .names(NameResolver::new(
            |word| format!("tbl_{word}"),
            |word| word.trim_start_matches("tbl_").to_string(),
        ))
        .model("post", |_| {})
        .build();
    let (mapper, _store, ops) = mapper_with(schema);

    mapper.find_all("post").await.unwrap();
    assert_eq!(recorded_tables(&ops), vec!["tbl_post"]);
}

#[tokio::test]
async fn column_overrides_apply_on_the_wire() {
    let schema = Schema::builder()
        .model("post", |m| {
            m.column("title", "headline");
        })
        .build();
    let (mapper, _store, ops) = mapper_with(schema);

    let created = mapper.create(&new_post("x")).await.unwrap();
    assert_eq!(created.attribute("title"), Some(&Value::from("x")));

    let recorded = ops.lock().unwrap();
    let Some(Operation::Insert(insert)) = recorded.first() else {
        panic!("expected an insert, got {recorded:?}");
    };
    assert_eq!(insert.row.get("headline"), Some(&Value::from("x")));
    assert!(!insert.row.contains("title"));
}

#[tokio::test]
async fn preserve_case_mode_maps_names_through_unchanged() {
    let schema = Schema::builder()
        .column_case(ColumnCase::Preserve)
        .model("post", |_| {})
        .build();
    let (mapper, store, _ops) = mapper_with(schema);

    seed_row(&store, "posts", &[("id", "p1"), ("someColumn", "v")]);

    let record = mapper.find_one("post", "p1").await.unwrap().unwrap();
    assert_eq!(record.attribute("someColumn"), Some(&Value::from("v")));
}
