use pretty_assertions::assert_eq;
use tessera::{
    stmt::{Delete, Fragment, Insert, Query, Update},
    Db, Value, ValueRecord,
};
use tests::{fixtures, setup_db, DriverOp, OpsLog};

fn executed_sql(ops: &OpsLog) -> Vec<String> {
    let log = ops.lock().unwrap();
    log.iter().filter_map(DriverOp::sql).map(str::to_string).collect()
}

async fn seed_users(db: &mut Db, users: &tessera::Table) {
    db.create_table(users).await.unwrap();
    db.exec(
        Insert::new(users)
            .row([Value::I64(1), "ann".into(), "ann@example.com".into()])
            .row([Value::I64(2), "bob".into(), "bob@example.com".into()]),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn create_insert_query() {
    let users = fixtures::users();
    let (mut db, ops) = setup_db(Db::builder()).await;

    db.create_table(&users).await.unwrap();

    let count = db
        .exec(
            Insert::new(&users)
                .row([Value::I64(1), "ann".into(), "ann@example.com".into()])
                .row([Value::I64(2), "bob".into(), "bob@example.com".into()]),
        )
        .await
        .unwrap();
    assert_eq!(count, 2);

    let rows: Vec<(i64, String, String)> = db
        .all(Query::new(&users).order_by("id"))
        .await
        .unwrap();

    assert_eq!(
        rows,
        [
            (1, "ann".to_string(), "ann@example.com".to_string()),
            (2, "bob".to_string(), "bob@example.com".to_string()),
        ]
    );

    assert_eq!(
        executed_sql(&ops),
        [
            "CREATE TABLE `users`(`id` BIGINT NOT NULL, `name` VARCHAR(255) NOT NULL, \
             `email` VARCHAR(255) NOT NULL, PRIMARY KEY(`id`), UNIQUE(`email`))",
            "INSERT INTO `users` VALUES (?,?,?),(?,?,?)",
            "SELECT * FROM `users` ORDER BY `users`.`id`",
        ]
    );
}

#[tokio::test]
async fn every_kind_round_trips() {
    let kinds = fixtures::kinds();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&kinds).await.unwrap();

    let row = vec![
        Value::I32(-5),
        Value::I64(i64::MAX),
        Value::F64(3.25),
        Value::F32(-0.5),
        Value::Bool(true),
        Value::from("tessera"),
    ];
    db.exec(Insert::new(&kinds).row(row.clone())).await.unwrap();

    let records: Vec<ValueRecord> = db.all(Query::new(&kinds)).await.unwrap();
    assert_eq!(records, [ValueRecord::from_vec(row)]);
}

#[tokio::test]
async fn empty_table() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let rows: Vec<ValueRecord> = db.all(Query::new(&users)).await.unwrap();
    assert!(rows.is_empty());

    let first: Option<ValueRecord> = db.first(Query::new(&users)).await.unwrap();
    assert!(first.is_none());
}

#[tokio::test]
async fn update_with_bound_values() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed_users(&mut db, &users).await;

    let count = db
        .exec(
            Update::new(&users, Fragment::new("name = ?").bind("anne"))
                .filter(Fragment::new("id = ?").bind(1i64)),
        )
        .await
        .unwrap();
    assert_eq!(count, 1);

    let row: Option<(i64, String, String)> = db
        .first(Query::new(&users).filter("id = 1"))
        .await
        .unwrap();
    assert_eq!(row.map(|(_, name, _)| name), Some("anne".to_string()));
}

#[tokio::test]
async fn delete_filtered_then_all() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed_users(&mut db, &users).await;

    assert_eq!(db.exec(Delete::new(&users).filter("id = 2")).await.unwrap(), 1);

    let names = db
        .all_with(Query::new(&users), |record| record.get::<String>(1))
        .await
        .unwrap();
    assert_eq!(names, ["ann"]);

    assert_eq!(db.exec(Delete::new(&users)).await.unwrap(), 1);
}

#[tokio::test]
async fn nullable_column_loads_as_option() {
    let posts = fixtures::posts();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&posts).await.unwrap();

    db.exec(
        Insert::new(&posts)
            .row([Value::I64(1), Value::I64(1), "first".into(), Value::I32(10)])
            .row([Value::I64(2), Value::I64(1), "second".into(), Value::Null]),
    )
    .await
    .unwrap();

    let scores: Vec<(String, Option<i32>)> = db
        .all_with(Query::new(&posts).order_by("id"), |record| {
            Ok((record.get(2)?, record.get_opt(3)?))
        })
        .await
        .unwrap();

    assert_eq!(
        scores,
        [("first".to_string(), Some(10)), ("second".to_string(), None)]
    );
}

#[tokio::test]
async fn invalid_insert_never_reaches_database() {
    let users = fixtures::users();
    let (mut db, ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let err = db
        .exec(
            Insert::new(&users)
                .row([Value::I64(1), "ann".into(), "ann@example.com".into()])
                .row([Value::from("two"), "bob".into(), "bob@example.com".into()]),
        )
        .await
        .unwrap_err();
    assert!(err.is_unsupported_kind());

    assert_eq!(ops.lock().unwrap().last(), Some(&DriverOp::Rejected));

    let rows: Vec<ValueRecord> = db.all(Query::new(&users)).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn unique_violation_is_driver_error() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    seed_users(&mut db, &users).await;

    let err = db
        .exec(Insert::new(&users).row([Value::I64(3), "ann2".into(), "ann@example.com".into()]))
        .await
        .unwrap_err();
    assert!(err.is_driver_operation_failed());
}

#[tokio::test]
async fn exec_rejects_queries() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let err = db.exec(Query::new(&users)).await.unwrap_err();
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn builder_pushes_registered_tables() {
    let mut builder = Db::builder();
    builder
        .register(fixtures::users())
        .register(fixtures::posts())
        .push_schema();

    let (mut db, ops) = setup_db(builder).await;

    let sql = executed_sql(&ops);
    assert_eq!(sql.len(), 2);
    assert!(sql[0].starts_with("CREATE TABLE `users`"));
    assert!(sql[1].starts_with("CREATE TABLE `posts`"));

    let posts = db.table("posts").unwrap().clone();
    assert!(db.table("comments").is_none());

    db.exec(Insert::new(&posts).row([Value::I64(1), Value::I64(1), "hi".into(), Value::Null]))
        .await
        .unwrap();
}
