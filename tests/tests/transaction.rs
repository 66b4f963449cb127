use pretty_assertions::assert_eq;
use tessera::{
    driver::operation::Transaction,
    stmt::{Insert, Query},
    Db, Table, Value, ValueRecord,
};
use tests::{fixtures, setup_db, DriverOp};

fn user(id: i64, name: &str) -> [Value; 3] {
    [
        Value::I64(id),
        name.into(),
        format!("{name}@example.com").into(),
    ]
}

async fn count(db: &mut Db, users: &Table) -> usize {
    let rows: Vec<ValueRecord> = db.all(Query::new(users)).await.unwrap();
    rows.len()
}

#[tokio::test]
async fn commit_persists() {
    let users = fixtures::users();
    let (mut db, ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let mut tx = db.transaction().await.unwrap();
    tx.exec(Insert::new(&users).row(user(1, "ann"))).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(count(&mut db, &users).await, 1);

    let log = ops.lock().unwrap();
    let control: Vec<_> = log
        .iter()
        .filter_map(|op| match op {
            DriverOp::Transaction(op) => Some(*op),
            _ => None,
        })
        .collect();
    assert_eq!(control, [Transaction::Start, Transaction::Commit]);
}

#[tokio::test]
async fn rollback_discards() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let mut tx = db.transaction().await.unwrap();
    tx.exec(Insert::new(&users).row(user(1, "ann"))).await.unwrap();
    assert_eq!(count(&mut tx, &users).await, 1);
    tx.rollback().await.unwrap();

    assert_eq!(count(&mut db, &users).await, 0);
}

#[tokio::test]
async fn dropped_guard_rolls_back() {
    let users = fixtures::users();
    let (mut db, ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    {
        let mut tx = db.transaction().await.unwrap();
        tx.exec(Insert::new(&users).row(user(1, "ann"))).await.unwrap();
    }

    assert_eq!(ops.lock().unwrap().last(), Some(&DriverOp::StartRollback));
    assert_eq!(count(&mut db, &users).await, 0);

    // The connection is usable for a new transaction afterwards
    let mut tx = db.transaction().await.unwrap();
    tx.exec(Insert::new(&users).row(user(2, "bob"))).await.unwrap();
    tx.commit().await.unwrap();
    assert_eq!(count(&mut db, &users).await, 1);
}

#[tokio::test]
async fn failed_statement_inside_transaction() {
    let users = fixtures::users();
    let (mut db, _ops) = setup_db(Db::builder()).await;
    db.create_table(&users).await.unwrap();

    let result = async {
        let mut tx = db.transaction().await?;
        tx.exec(Insert::new(&users).row(user(1, "ann"))).await?;
        // Duplicate primary key
        tx.exec(Insert::new(&users).row(user(1, "again"))).await?;
        tx.commit().await
    }
    .await;

    assert!(result.unwrap_err().is_driver_operation_failed());
    assert_eq!(count(&mut db, &users).await, 0);
}
