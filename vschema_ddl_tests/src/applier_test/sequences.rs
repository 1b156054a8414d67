use super::*;

#[test]
fn add_sequence_creates_sequence_table() {
    let mut store = MemSchemaStore::new();
    let schema = commit(&mut store, add_sequence("user_seq"));
    let table = &schema.tables["user_seq"];
    assert!(table.is_sequence());
    assert_eq!(table.table_type, "sequence");
    assert!(table.column_vindexes.is_empty());
}

#[test]
fn add_sequence_twice_fails() {
    let mut store = MemSchemaStore::new();
    commit(&mut store, add_sequence("user_seq"));
    let err = reject(&store, add_sequence("user_seq"));
    assert_eq!(
        err,
        VSchemaError::AlreadyExists {
            keyspace: KS.to_string(),
            object: SchemaObject::Sequence("user_seq".to_string()),
        }
    );
}

#[test]
fn add_sequence_over_existing_table_fails() {
    let mut store = MemSchemaStore::new();
    commit(&mut store, add_table("user_seq"));
    let err = reject(&store, add_sequence("user_seq"));
    assert!(matches!(err, VSchemaError::AlreadyExists { .. }));
}

#[test]
fn drop_sequence_removes_it() {
    let mut store = MemSchemaStore::new();
    commit(&mut store, add_sequence("user_seq"));
    let schema = commit(&mut store, drop_sequence("user_seq"));
    assert!(schema.tables.is_empty());
}

#[test]
fn drop_missing_sequence_is_not_found() {
    let store = MemSchemaStore::new();
    let err = reject(&store, drop_sequence("user_seq"));
    assert!(matches!(
        err,
        VSchemaError::NotFound { object: SchemaObject::Sequence(ref s), .. } if s == "user_seq"
    ));
}

#[test]
fn sequences_rejected_on_sharded_keyspace_even_when_absent() {
    let mut store = MemSchemaStore::new();
    commit(&mut store, add_sequence("user_seq"));
    commit(&mut store, create_vindex("hash_vdx", "hash"));

    let err = reject(&store, add_sequence("order_seq"));
    assert!(matches!(
        err,
        VSchemaError::InvalidOnSharded { action: ActionKind::AddSequence, .. }
    ));
    let err = reject(&store, drop_sequence("user_seq"));
    assert!(matches!(
        err,
        VSchemaError::InvalidOnSharded { action: ActionKind::DropSequence, .. }
    ));
    let err = reject(&store, drop_sequence("missing_seq"));
    assert!(matches!(err, VSchemaError::InvalidOnSharded { .. }));
}
