use super::*;
use vschema_ddl_core::{apply_statement, AlterVschema, StoreError};

struct FailingStore;

impl SchemaStore for FailingStore {
    fn get_vschema(&self, _keyspace: &str) -> Result<KeyspaceSchema, StoreError> {
        Err(StoreError::Backend("topology unavailable".to_string()))
    }

    fn save_vschema(&mut self, _keyspace: &str, _schema: &KeyspaceSchema) -> Result<(), StoreError> {
        Err(StoreError::Backend("topology unavailable".to_string()))
    }
}

#[test]
fn parsed_statement_is_applied() {
    let store = MemSchemaStore::new();
    let mut stmt = AlterVschema::new(ActionKind::AddColumnVindex);
    stmt.table = Some("user".to_string());
    stmt.vindex_spec = Some(VindexSpec::new("hash_vdx").with_type("hash"));
    stmt.vindex_cols = vec!["user_id".to_string()];

    let schema = apply_statement(KS, Some(&store), stmt).unwrap();
    assert!(schema.sharded);
    assert_eq!(schema.tables["user"].column_vindexes[0].columns, vec!["user_id"]);
}

#[test]
fn action_keyword_from_parser() {
    let store = MemSchemaStore::new();
    let action: ActionKind = "add sequence table".parse().unwrap();
    let mut stmt = AlterVschema::new(action);
    stmt.table = Some("user_seq".to_string());

    let schema = apply_statement(KS, Some(&store), stmt).unwrap();
    assert!(schema.tables["user_seq"].is_sequence());
}

#[test]
fn unknown_action_keyword() {
    let err = "alter vindex".parse::<ActionKind>().unwrap_err();
    assert_eq!(err, VSchemaError::UnknownAction("alter vindex".to_string()));
    assert_eq!(err.to_string(), "unexpected vindex ddl operation alter vindex");
}

#[test]
fn statement_missing_clause_never_reaches_store() {
    let err = apply_statement(KS, None, AlterVschema::new(ActionKind::DropVindex)).unwrap_err();
    assert!(matches!(
        err,
        VSchemaError::MissingClause { action: ActionKind::DropVindex, clause: "vindex" }
    ));
}

#[test]
fn store_failures_are_wrapped_with_keyspace() {
    let store = FailingStore;
    let err = apply_vschema_ddl(KS, Some(&store), &add_table("t")).unwrap_err();
    assert_eq!(
        err,
        VSchemaError::Store {
            keyspace: KS.to_string(),
            source: StoreError::Backend("topology unavailable".to_string()),
        }
    );
    assert_eq!(
        err.to_string(),
        "failed to get the current VSchema for the commerce keyspace: topology unavailable"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn applying_does_not_write_back() {
    let store = MemSchemaStore::new();
    apply(&store, create_vindex("hash_vdx", "hash")).unwrap();
    assert!(!store.contains(KS));
}

#[test]
fn every_action_kind_has_a_handler() {
    let mut schema = KeyspaceSchema::new();
    let script = vec![
        add_table("plain"),
        add_sequence("seq"),
        add_auto_inc("plain", "id", "seq"),
        drop_auto_inc("plain"),
        drop_table("plain"),
        drop_sequence("seq"),
        create_vindex("hash_vdx", "hash"),
        add_column_vindex("t1", VindexSpec::new("hash_vdx"), &["id"]),
        drop_column_vindex("t1", "hash_vdx"),
        drop_vindex("hash_vdx"),
    ];
    let mut seen: Vec<ActionKind> = Vec::new();
    for ddl in &script {
        apply_to_keyspace(KS, &mut schema, ddl).unwrap();
        seen.push(ddl.kind());
    }
    for kind in ActionKind::ALL {
        assert!(seen.contains(&kind), "{kind} not exercised");
    }
    assert_eq!(
        schema,
        KeyspaceSchema {
            sharded: true,
            ..KeyspaceSchema::default()
        }
    );
}
