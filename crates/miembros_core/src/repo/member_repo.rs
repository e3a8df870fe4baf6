//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide identifier-keyed CRUD primitives over the `miembro` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `id` values come from SQLite `AUTOINCREMENT` and are never reused.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::member::{Member, MemberId, NewMember};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    nombre,
    apellido,
    email,
    activo
FROM miembro";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(MemberId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "member not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage collaborator consumed by `MemberService`.
pub trait MemberRepository {
    /// Stores a new row and returns it with the assigned id.
    fn insert(&self, member: &NewMember) -> RepoResult<Member>;
    /// Overwrites every column of an existing row.
    fn save(&self, member: &Member) -> RepoResult<Member>;
    fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;
    fn exists_by_id(&self, id: MemberId) -> RepoResult<bool>;
    fn delete_by_id(&self, id: MemberId) -> RepoResult<()>;
    fn find_all(&self) -> RepoResult<Vec<Member>>;
}

/// SQLite-backed member repository.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn insert(&self, member: &NewMember) -> RepoResult<Member> {
        self.conn.execute(
            "INSERT INTO miembro (
                nombre,
                apellido,
                email,
                activo
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                member.first_name.as_deref(),
                member.last_name.as_deref(),
                member.email.as_deref(),
                bool_to_int(member.active),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(member.clone().into_member(id))
    }

    fn save(&self, member: &Member) -> RepoResult<Member> {
        let changed = self.conn.execute(
            "UPDATE miembro
             SET
                nombre = ?1,
                apellido = ?2,
                email = ?3,
                activo = ?4
             WHERE id = ?5;",
            params![
                member.first_name.as_deref(),
                member.last_name.as_deref(),
                member.email.as_deref(),
                bool_to_int(member.active),
                member.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(member.id));
        }

        Ok(member.clone())
    }

    fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_member_row(row)?));
        }

        Ok(None)
    }

    fn exists_by_id(&self, id: MemberId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM miembro WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_by_id(&self, id: MemberId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM miembro WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn find_all(&self) -> RepoResult<Vec<Member>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut members = Vec::new();

        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }

        Ok(members)
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<Member> {
    let id: MemberId = row.get("id")?;
    let active = match row.get::<_, i64>("activo")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid activo value `{other}` in miembro.activo for id {id}"
            )));
        }
    };

    Ok(Member {
        id,
        first_name: row.get("nombre")?,
        last_name: row.get("apellido")?,
        email: row.get("email")?,
        active,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
