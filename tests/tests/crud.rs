use tests::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn create_find_update_delete_lifecycle() {
    let (mapper, _store, _ops) = mapper_with(blog_schema());

    let created = mapper.create(&new_post("hello")).await.unwrap();
    let id = created.id.clone().expect("backend assigns an id");
    assert_eq!(created.attribute("title"), Some(&Value::from("hello")));
    // Backend-managed timestamps come back as attributes.
    assert!(created.attribute("createdAt").is_some());
    assert!(created.attribute("updatedAt").is_some());

    let found = mapper.find_one("post", id.clone()).await.unwrap().unwrap();
    assert_eq!(found.attribute("title"), Some(&Value::from("hello")));

    let mut changed = found;
    changed.set_attribute("title", "goodbye");
    let updated = mapper.update(&changed).await.unwrap();
    assert_eq!(updated.attribute("title"), Some(&Value::from("goodbye")));
    assert_eq!(updated.id, Some(id.clone()));

    let all = mapper.find_all("post").await.unwrap();
    assert_eq!(all.len(), 1);

    mapper.delete("post", id.clone()).await.unwrap();
    assert_eq!(mapper.find_one("post", id).await.unwrap(), None);
    assert!(mapper.find_all("post").await.unwrap().is_empty());
}

#[tokio::test]
async fn find_one_absence_is_empty_not_error() {
    let (mapper, _store, _ops) = mapper_with(blog_schema());

    let found = mapper.find_one("post", "missing").await.unwrap();
    assert_eq!(found, None);
}

#[tokio::test]
async fn update_never_assigns_the_id_column() {
    let (mapper, _store, ops) = mapper_with(blog_schema());

    let created = mapper.create(&new_post("hello")).await.unwrap();
    mapper.update(&created).await.unwrap();

    let recorded = ops.lock().unwrap();
    let update = recorded
        .iter()
        .find_map(|op| match op {
            Operation::UpdateByKey(op) => Some(op.clone()),
            _ => None,
        })
        .expect("an update was issued");

    assert!(!update.assignments.contains("id"));
    assert_eq!(Some(&update.key), created.id.as_ref());
}

#[tokio::test]
async fn find_all_preserves_backend_order() {
    let (mapper, store, _ops) = mapper_with(blog_schema());

    seed_row(&store, "posts", &[("id", "p1"), ("title", "first")]);
    seed_row(&store, "posts", &[("id", "p2"), ("title", "second")]);
    seed_row(&store, "posts", &[("id", "p3"), ("title", "third")]);

    let all = mapper.find_all("post").await.unwrap();
    let ids: Vec<_> = all.iter().map(|record| record.id.clone().unwrap()).collect();
    assert_eq!(
        ids,
        vec![Value::from("p1"), Value::from("p2"), Value::from("p3")]
    );
}

#[tokio::test]
async fn unknown_model_is_rejected() {
    let (mapper, _store, ops) = mapper_with(blog_schema());

    assert!(mapper.find_all("widget").await.is_err());
    assert!(ops.lock().unwrap().is_empty());
}
