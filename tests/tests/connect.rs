use tessera::{
    stmt::{Insert, Query},
    Db, Value,
};
use tests::fixtures;

#[tokio::test]
async fn connect_in_memory() {
    let users = fixtures::users();
    let mut db = Db::connect("sqlite::memory:").await.unwrap();

    db.create_table(&users).await.unwrap();
    let rows: Vec<(i64, String, String)> = db.all(Query::new(&users)).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Db::connect("redis://localhost").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn unparsable_url() {
    let err = Db::connect("no scheme here").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn file_database_persists_across_connections() {
    let path = std::env::temp_dir().join(format!("tessera-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());

    let users = fixtures::users();

    {
        let mut db = Db::connect(&url).await.unwrap();
        db.create_table(&users).await.unwrap();
        db.exec(Insert::new(&users).row([
            Value::I64(1),
            "ann".into(),
            "ann@example.com".into(),
        ]))
        .await
        .unwrap();
    }

    let mut db = Db::connect(&url).await.unwrap();
    let names = db
        .all_with(Query::new(&users), |record| record.get::<String>(1))
        .await
        .unwrap();
    assert_eq!(names, ["ann"]);

    drop(db);
    let _ = std::fs::remove_file(&path);
}
