//! Table definitions known to the schema initializer.
//!
//! Every entity the application persists is listed in [`registered_tables`];
//! nothing is picked up implicitly.

/// A table and the DDL that creates it when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: &'static str,
    pub ddl: &'static str,
}

pub const USERS_TABLE: TableDefinition = TableDefinition {
    name: "users",
    ddl: r#"
    create table if not exists users (
        id integer primary key autoincrement,
        username text not null unique check (length(username) <= 120),
        email text not null unique check (length(email) <= 600),
        password_hash text not null,
        role text not null default 'cashier' check (role in ('cashier', 'admin')),
        created_at integer not null default (cast(strftime('%s', 'now') as integer))
    )
    "#,
};

pub fn registered_tables() -> Vec<TableDefinition> {
    vec![USERS_TABLE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_tables_are_unique_and_guarded() {
        let tables = registered_tables();
        assert!(tables.contains(&USERS_TABLE));
        for (i, table) in tables.iter().enumerate() {
            assert!(table.ddl.contains("if not exists"), "{}", table.name);
            assert!(tables[i + 1..].iter().all(|t| t.name != table.name));
        }
    }
}
