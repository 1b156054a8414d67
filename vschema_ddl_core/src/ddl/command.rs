use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::ddl::params::parse_params;
use crate::error::VSchemaError;
use crate::vschema::Vindex;

/// The ten ALTER VSCHEMA actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CreateVindex,
    DropVindex,
    AddTable,
    DropTable,
    AddColumnVindex,
    DropColumnVindex,
    AddSequence,
    DropSequence,
    AddAutoIncrement,
    DropAutoIncrement,
}

impl ActionKind {
    pub const ALL: [ActionKind; 10] = [
        ActionKind::CreateVindex,
        ActionKind::DropVindex,
        ActionKind::AddTable,
        ActionKind::DropTable,
        ActionKind::AddColumnVindex,
        ActionKind::DropColumnVindex,
        ActionKind::AddSequence,
        ActionKind::DropSequence,
        ActionKind::AddAutoIncrement,
        ActionKind::DropAutoIncrement,
    ];

    /// Statement keyword, e.g. `add vindex` for attaching a column vindex
    pub fn keyword(self) -> &'static str {
        match self {
            ActionKind::CreateVindex => "create vindex",
            ActionKind::DropVindex => "drop vindex",
            ActionKind::AddTable => "add vschema table",
            ActionKind::DropTable => "drop vschema table",
            ActionKind::AddColumnVindex => "add vindex",
            ActionKind::DropColumnVindex => "drop vindex from table",
            ActionKind::AddSequence => "add sequence table",
            ActionKind::DropSequence => "drop sequence table",
            ActionKind::AddAutoIncrement => "add auto_increment",
            ActionKind::DropAutoIncrement => "drop auto_increment",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ActionKind {
    type Err = VSchemaError;

    /// Accepts the statement keyword in any case, with spaces or underscores
    /// between words (`add vschema table`, `ADD_VSCHEMA_TABLE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_keyword(s);
        ActionKind::ALL
            .into_iter()
            .find(|kind| normalize_keyword(kind.keyword()) == wanted)
            .ok_or_else(|| VSchemaError::UnknownAction(s.trim().to_string()))
    }
}

fn normalize_keyword(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Vindex clause of a statement: name, optional type, raw `key=value` params
/// and optional owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VindexSpec {
    pub name: String,
    pub vindex_type: Option<String>,
    pub params: Vec<String>,
    pub owner: Option<String>,
}

impl VindexSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, vindex_type: impl Into<String>) -> Self {
        self.vindex_type = Some(vindex_type.into());
        self
    }

    pub fn with_param(mut self, raw: impl Into<String>) -> Self {
        self.params.push(raw.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// The declared type; an empty string counts as not declared
    pub fn declared_type(&self) -> Option<&str> {
        self.vindex_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Resolves (owner, params); an explicit owner beats an `owner=` param.
    pub fn parse_params(&self) -> (String, HashMap<String, String>) {
        let (owner, params) = parse_params(&self.params);
        match &self.owner {
            Some(explicit) => (explicit.clone(), params),
            None => (owner, params),
        }
    }

    /// Full vindex definition, or None when no type was declared
    pub fn definition(&self) -> Option<Vindex> {
        let vindex_type = self.declared_type()?.to_string();
        let (owner, params) = self.parse_params();
        Some(Vindex {
            vindex_type,
            params,
            owner,
        })
    }
}

/// Auto-increment clause: column plus the sequence reference, kept verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoIncSpec {
    pub column: String,
    pub sequence: String,
}

impl AutoIncSpec {
    pub fn new(column: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            sequence: sequence.into(),
        }
    }
}

/// Statement as handed over by the SQL parser: an action keyword plus
/// whichever clauses were present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterVschema {
    pub action: ActionKind,
    pub table: Option<String>,
    pub vindex_spec: Option<VindexSpec>,
    pub vindex_cols: Vec<String>,
    pub auto_inc_spec: Option<AutoIncSpec>,
}

impl AlterVschema {
    pub fn new(action: ActionKind) -> Self {
        Self {
            action,
            table: None,
            vindex_spec: None,
            vindex_cols: Vec::new(),
            auto_inc_spec: None,
        }
    }
}

/// One VSchema DDL action with exactly the fields its handler needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VSchemaDdl {
    CreateVindex(VindexSpec),
    DropVindex {
        name: String,
    },
    AddTable {
        table: String,
    },
    DropTable {
        table: String,
    },
    AddColumnVindex {
        table: String,
        vindex: VindexSpec,
        columns: Vec<String>,
    },
    DropColumnVindex {
        table: String,
        vindex: String,
    },
    AddSequence {
        table: String,
    },
    DropSequence {
        table: String,
    },
    AddAutoIncrement {
        table: String,
        auto_inc: AutoIncSpec,
    },
    DropAutoIncrement {
        table: String,
    },
}

impl VSchemaDdl {
    pub fn kind(&self) -> ActionKind {
        match self {
            VSchemaDdl::CreateVindex(_) => ActionKind::CreateVindex,
            VSchemaDdl::DropVindex { .. } => ActionKind::DropVindex,
            VSchemaDdl::AddTable { .. } => ActionKind::AddTable,
            VSchemaDdl::DropTable { .. } => ActionKind::DropTable,
            VSchemaDdl::AddColumnVindex { .. } => ActionKind::AddColumnVindex,
            VSchemaDdl::DropColumnVindex { .. } => ActionKind::DropColumnVindex,
            VSchemaDdl::AddSequence { .. } => ActionKind::AddSequence,
            VSchemaDdl::DropSequence { .. } => ActionKind::DropSequence,
            VSchemaDdl::AddAutoIncrement { .. } => ActionKind::AddAutoIncrement,
            VSchemaDdl::DropAutoIncrement { .. } => ActionKind::DropAutoIncrement,
        }
    }
}

impl TryFrom<AlterVschema> for VSchemaDdl {
    type Error = VSchemaError;

    fn try_from(stmt: AlterVschema) -> Result<Self, Self::Error> {
        let action = stmt.action;
        let missing = |clause: &'static str| VSchemaError::MissingClause { action, clause };
        let table = stmt.table.filter(|t| !t.is_empty());

        let ddl = match action {
            ActionKind::CreateVindex => {
                VSchemaDdl::CreateVindex(stmt.vindex_spec.ok_or_else(|| missing("vindex"))?)
            }
            ActionKind::DropVindex => VSchemaDdl::DropVindex {
                name: stmt.vindex_spec.ok_or_else(|| missing("vindex"))?.name,
            },
            ActionKind::AddTable => VSchemaDdl::AddTable {
                table: table.ok_or_else(|| missing("table"))?,
            },
            ActionKind::DropTable => VSchemaDdl::DropTable {
                table: table.ok_or_else(|| missing("table"))?,
            },
            ActionKind::AddColumnVindex => VSchemaDdl::AddColumnVindex {
                table: table.ok_or_else(|| missing("table"))?,
                vindex: stmt.vindex_spec.ok_or_else(|| missing("vindex"))?,
                columns: stmt.vindex_cols,
            },
            ActionKind::DropColumnVindex => VSchemaDdl::DropColumnVindex {
                table: table.ok_or_else(|| missing("table"))?,
                vindex: stmt.vindex_spec.ok_or_else(|| missing("vindex"))?.name,
            },
            ActionKind::AddSequence => VSchemaDdl::AddSequence {
                table: table.ok_or_else(|| missing("table"))?,
            },
            ActionKind::DropSequence => VSchemaDdl::DropSequence {
                table: table.ok_or_else(|| missing("table"))?,
            },
            ActionKind::AddAutoIncrement => VSchemaDdl::AddAutoIncrement {
                table: table.ok_or_else(|| missing("table"))?,
                auto_inc: stmt.auto_inc_spec.ok_or_else(|| missing("auto_increment"))?,
            },
            ActionKind::DropAutoIncrement => VSchemaDdl::DropAutoIncrement {
                table: table.ok_or_else(|| missing("table"))?,
            },
        };
        Ok(ddl)
    }
}
