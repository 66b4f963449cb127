use pretty_assertions::assert_eq;
use tessera::{
    stmt::{Insert, Join},
    Db, Value,
};
use tests::{fixtures, setup_db};

async fn seed(db: &mut Db, users: &tessera::Table, posts: &tessera::Table) {
    db.create_table(users).await.unwrap();
    db.create_table(posts).await.unwrap();

    db.exec(
        Insert::new(users)
            .row([Value::I64(1), "ann".into(), "ann@example.com".into()])
            .row([Value::I64(2), "bob".into(), "bob@example.com".into()]),
    )
    .await
    .unwrap();

    db.exec(
        Insert::new(posts)
            .row([Value::I64(1), Value::I64(1), "hello".into(), Value::I32(3)])
            .row([Value::I64(2), Value::I64(1), "again".into(), Value::Null])
            .row([Value::I64(3), Value::I64(2), "bob here".into(), Value::I32(7)]),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn inner_join_both_sides() {
    let (users, posts) = (fixtures::users(), fixtures::posts());
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed(&mut db, &users, &posts).await;

    let rows: Vec<(String, String)> = db
        .all(
            Join::new(&users, &posts)
                .select_left(["name"])
                .select_right(["title"])
                .on("users.id = posts.user_id")
                .order_by(("posts", "id")),
        )
        .await
        .unwrap();

    assert_eq!(
        rows,
        [
            ("ann".to_string(), "hello".to_string()),
            ("ann".to_string(), "again".to_string()),
            ("bob".to_string(), "bob here".to_string()),
        ]
    );
}

#[tokio::test]
async fn right_only_projection_with_filter() {
    let (users, posts) = (fixtures::users(), fixtures::posts());
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed(&mut db, &users, &posts).await;

    let rows: Vec<(String, Option<i32>)> = db
        .all(
            Join::new(&users, &posts)
                .kind("LEFT JOIN")
                .select_right(["title", "score"])
                .on("users.id = posts.user_id")
                .filter("users.name = 'ann'")
                .order_by(("posts", "id"))
                .desc(),
        )
        .await
        .unwrap();

    assert_eq!(
        rows,
        [("again".to_string(), None), ("hello".to_string(), Some(3))]
    );
}

#[tokio::test]
async fn grouped_join() {
    let (users, posts) = (fixtures::users(), fixtures::posts());
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed(&mut db, &users, &posts).await;

    let rows: Vec<(i64,)> = db
        .all(
            Join::new(&users, &posts)
                .select_left(["id"])
                .on("users.id = posts.user_id")
                .group_by(("users", "id"))
                .order_by(("users", "id"))
                .asc(),
        )
        .await
        .unwrap();

    assert_eq!(rows, [(1,), (2,)]);
}
