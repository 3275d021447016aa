use tests::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn outcomes_preserve_intent_order() {
    let (mapper, store, _ops) = mapper_with(blog_schema());
    seed_row(&store, "posts", &[("id", "p1"), ("title", "first")]);

    let outcomes = mapper
        .exec_batch(vec![
            Intent::FindAll {
                model: "post".into(),
            },
            Intent::Create {
                record: new_post("second"),
            },
            Intent::FindOne {
                model: "post".into(),
                id: Value::from("p1"),
            },
        ])
        .await
        .unwrap();

    let [all, created, found] = &outcomes[..] else {
        panic!("expected three outcomes, got {outcomes:?}");
    };
    let Outcome::Records(all) = all else {
        panic!("expected records, got {all:?}");
    };
    assert_eq!(all.len(), 1);
    let Outcome::Record(Some(created)) = created else {
        panic!("expected a created record, got {created:?}");
    };
    assert_eq!(created.attribute("title"), Some(&Value::from("second")));

    let Outcome::Record(Some(found)) = found else {
        panic!("expected a found record, got {found:?}");
    };
    assert_eq!(found.id, Some(Value::from("p1")));
}

#[tokio::test]
async fn failure_reports_the_intent_index_and_keeps_earlier_effects() {
    let (mapper, store, _ops) = mapper_with(blog_schema());

    // The second intent updates a record with no id and must fail.
    let err = mapper
        .exec_batch(vec![
            Intent::Create {
                record: new_post("kept"),
            },
            Intent::Update {
                record: new_post("broken"),
            },
            Intent::Create {
                record: new_post("never-attempted"),
            },
        ])
        .await
        .unwrap_err();

    assert_eq!(err.batch_index(), Some(1));

    // Earlier intents stay committed; later ones were not attempted.
    let rows = store.rows("posts");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("title"), Some(&Value::from("kept")));
}

#[tokio::test]
async fn batch_failure_predicates_see_through_the_wrapper() {
    let (mapper, _store, _ops) = mapper_with_subject(secured_blog_schema(), None);

    let err = mapper
        .exec_batch(vec![Intent::FindAll {
            model: "post".into(),
        }])
        .await
        .unwrap_err();

    assert_eq!(err.batch_index(), Some(0));
    assert!(err.is_missing_subject());
}
