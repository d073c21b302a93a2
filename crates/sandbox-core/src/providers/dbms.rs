//! Database engines the sandbox can be generated for

pub const POSTGRES: &str = "Postgres";
pub const MYSQL: &str = "MySQL";
pub const SQL_SERVER: &str = "SQL Server";

/// A supported DBMS and the versions available for it, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dbms {
    pub name: &'static str,
    pub versions: &'static [&'static str],
}

// https://hub.docker.com/_/postgres/tags
const POSTGRES_DBMS: Dbms = Dbms {
    name: POSTGRES,
    versions: &["16", "15", "14", "13", "12"],
};

// https://hub.docker.com/_/mysql/tags
const MYSQL_DBMS: Dbms = Dbms {
    name: MYSQL,
    versions: &["8.0.37", "8.0.36", "8.0.35", "8.0.34", "8.0.33"],
};

// https://hub.docker.com/_/microsoft-mssql-server
const SQL_SERVER_DBMS: Dbms = Dbms {
    name: SQL_SERVER,
    versions: &["2022-latest", "2019-latest", "2017-latest"],
};

/// Every supported DBMS, in the order they are offered to the user
pub const SUPPORTED_DBMS: &[Dbms] = &[POSTGRES_DBMS, MYSQL_DBMS, SQL_SERVER_DBMS];

impl Dbms {
    /// Look up a DBMS by display name.
    ///
    /// Unknown names fall back to Postgres rather than failing.
    pub fn lookup(name: &str) -> Dbms {
        SUPPORTED_DBMS
            .iter()
            .copied()
            .find(|dbms| dbms.name == name)
            .unwrap_or(POSTGRES_DBMS)
    }

    /// Display names of all supported DBMSs
    pub fn names() -> Vec<String> {
        SUPPORTED_DBMS.iter().map(|d| d.name.to_string()).collect()
    }
}
