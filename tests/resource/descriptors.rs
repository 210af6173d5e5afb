use rowshape::{Element, Pattern};

#[derive(Pattern)]
pub struct ColumnPattern;

/// Table column holding an optional default of its value type.
#[derive(Element, Debug, Clone, PartialEq)]
#[element(kind = "column", pattern = ColumnPattern)]
pub struct Column<T> {
    pub name: &'static str,
    pub default: Option<T>,
}

impl<T> Column<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }
}

#[derive(Element, Debug, Clone, PartialEq)]
#[element(kind = "primary_key")]
pub struct PrimaryKey {
    pub columns: Vec<&'static str>,
}

#[derive(Element, Debug, Clone, PartialEq)]
#[element(kind = "unique")]
pub struct Unique {
    pub columns: Vec<&'static str>,
}

#[derive(Element, Debug, Clone, PartialEq)]
#[element(kind = "foreign_key")]
pub struct ForeignKey {
    pub column: &'static str,
    pub references: &'static str,
}

#[derive(Element, Debug, Clone, PartialEq)]
#[element(kind = "check")]
pub struct Check {
    pub expression: &'static str,
}

pub type UsersTable = (
    Column<i64>,
    Column<String>,
    PrimaryKey,
    Column<Option<String>>,
    Unique,
);

pub fn users_table() -> UsersTable {
    (
        Column {
            name: "id",
            default: None,
        },
        Column {
            name: "email",
            default: None,
        },
        PrimaryKey {
            columns: vec!["id"],
        },
        Column {
            name: "nickname",
            default: Some(None),
        },
        Unique {
            columns: vec!["email"],
        },
    )
}
