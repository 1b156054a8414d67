use super::*;
use vschema_ddl_core::AutoIncrement;

#[test]
fn add_auto_increment_copies_sequence_verbatim() {
    let mut store = store_with_t1();
    let schema = commit(&mut store, add_auto_inc("t1", "id", "`lookup`.`t1_seq`"));
    assert_eq!(
        schema.tables["t1"].auto_increment,
        Some(AutoIncrement {
            column: "id".to_string(),
            sequence: "`lookup`.`t1_seq`".to_string(),
        })
    );
}

#[test]
fn add_auto_increment_on_missing_table() {
    let store = MemSchemaStore::new();
    let err = reject(&store, add_auto_inc("t1", "id", "t1_seq"));
    assert_eq!(
        err,
        VSchemaError::NotFound {
            keyspace: KS.to_string(),
            object: SchemaObject::Table("t1".to_string()),
        }
    );
}

#[test]
fn table_holds_one_auto_increment() {
    let mut store = store_with_t1();
    commit(&mut store, add_auto_inc("t1", "id", "t1_seq"));

    let err = reject(&store, add_auto_inc("t1", "other", "other_seq"));
    assert_eq!(
        err,
        VSchemaError::AlreadyExists {
            keyspace: KS.to_string(),
            object: SchemaObject::AutoIncrement {
                table: "t1".to_string(),
            },
        }
    );
}

#[test]
fn drop_auto_increment_clears_it() {
    let mut store = store_with_t1();
    commit(&mut store, add_auto_inc("t1", "id", "t1_seq"));
    let schema = commit(&mut store, drop_auto_inc("t1"));
    let table = &schema.tables["t1"];
    assert!(table.auto_increment.is_none());
    assert_eq!(table.column_vindexes.len(), 1);
}

#[test]
fn drop_auto_increment_errors() {
    let store = store_with_t1();
    let err = reject(&store, drop_auto_inc("t1"));
    assert!(matches!(
        err,
        VSchemaError::NotFound { object: SchemaObject::AutoIncrement { .. }, .. }
    ));

    let err = reject(&store, drop_auto_inc("missing"));
    assert!(matches!(
        err,
        VSchemaError::NotFound { object: SchemaObject::Table(ref t), .. } if t == "missing"
    ));
}

#[test]
fn auto_increment_allowed_on_sharded_keyspace() {
    let mut store = store_with_t1();
    let schema = commit(&mut store, add_auto_inc("t1", "id", "t1_seq"));
    assert!(schema.sharded);
    assert!(schema.tables["t1"].auto_increment.is_some());
}
