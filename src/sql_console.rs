//! SQL Console helpers
//!
//! Read-only guard, query history and CSV export for the admin console.

use std::collections::VecDeque;

use serde_json::Value;

use crate::error::ValidationError;
use crate::models::SqlQueryResult;

pub const HISTORY_LIMIT: usize = 10;

pub const DEFAULT_QUERY: &str = "SELECT * FROM users LIMIT 10;";

const READ_ONLY_KEYWORDS: [&str; 4] = ["SELECT", "WITH", "EXPLAIN", "SHOW"];

/// (label, query)
pub const EXAMPLE_QUERIES: &[(&str, &str)] = &[
    ("Tüm Kullanıcılar", "SELECT id, name, email, role FROM users;"),
    ("Tüm Odalar", "SELECT * FROM rooms;"),
    (
        "Bekleyen Rezervasyonlar",
        "SELECT r.*, u.name AS user_name, ro.name AS room_name FROM reservations r \
         JOIN users u ON r.user_id = u.id JOIN rooms ro ON r.room_id = ro.id \
         WHERE r.status = 'BEKLENIYOR';",
    ),
    ("Kullanıcı İstatistikleri", "SELECT role, COUNT(*) AS count FROM users GROUP BY role;"),
    (
        "Oda Doluluk Oranı",
        "SELECT r.name, COUNT(res.id) AS reservation_count FROM rooms r \
         LEFT JOIN reservations res ON r.id = res.room_id GROUP BY r.id, r.name;",
    ),
    (
        "Son 7 Gün Rezervasyonları",
        "SELECT COUNT(*) AS total, DATE(created_at) AS date FROM reservations \
         WHERE created_at >= CURRENT_DATE - INTERVAL '7 days' \
         GROUP BY DATE(created_at) ORDER BY date;",
    ),
];

/// Statements and clauses that write, lock or change privileges
const WRITE_KEYWORDS: [&str; 13] = [
    "INSERT", "UPDATE", "DELETE", "MERGE", "DROP", "ALTER", "CREATE", "TRUNCATE", "GRANT", "REVOKE", "INTO",
    "COPY", "CALL",
];

/// Accept a single statement starting with a read-only keyword.
/// Comments and quoted text are ignored; a trailing `;` is allowed. Write
/// keywords anywhere in the statement (writable CTEs, `SELECT ... INTO`) and
/// `EXPLAIN ANALYZE` are refused.
pub fn check_read_only(query: &str) -> Result<(), ValidationError> {
    let code = strip_literals_and_comments(query);
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    let body = trimmed.strip_suffix(';').unwrap_or(trimmed);
    if body.contains(';') {
        return Err(ValidationError::StatementNotAllowed);
    }

    let words: Vec<String> = body
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_uppercase())
        .collect();

    let Some(first) = words.first() else {
        return Err(ValidationError::StatementNotAllowed);
    };
    if !READ_ONLY_KEYWORDS.contains(&first.as_str()) {
        return Err(ValidationError::StatementNotAllowed);
    }
    if first == "EXPLAIN" && words.iter().any(|w| w == "ANALYZE" || w == "ANALYSE") {
        return Err(ValidationError::StatementNotAllowed);
    }
    if words.iter().any(|w| WRITE_KEYWORDS.contains(&w.as_str())) {
        return Err(ValidationError::StatementNotAllowed);
    }

    Ok(())
}

/// The query with quoted text and comments replaced by a single space
fn strip_literals_and_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => {
                // A doubled quote closes and reopens, which leaves it blanked too
                for next in chars.by_ref() {
                    if next == c {
                        break;
                    }
                }
                out.push(' ');
            }
            '-' if chars.peek() == Some(&'-') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        break;
                    }
                }
                out.push('\n');
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

/// Most recent distinct queries, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryHistory {
    entries: VecDeque<String>,
}

impl QueryHistory {
    /// Record a successfully executed query. A repeat moves to the front.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|q| q != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Header line plus one line per row, RFC 4180 quoting
pub fn to_csv(result: &SqlQueryResult) -> String {
    let mut csv = String::new();
    push_line(&mut csv, result.columns.iter().map(|c| escape_field(c)));
    for row in &result.rows {
        push_line(&mut csv, row.iter().map(|v| escape_field(&cell_text(v))));
    }
    csv
}

/// Display text of a result cell; NULL shows empty
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_line(out: &mut String, fields: impl Iterator<Item = String>) {
    let line = fields.collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push_str("\r\n");
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `query_result_<millis>.csv`
pub fn export_file_name(timestamp_ms: u64) -> String {
    format!("query_result_{}.csv", timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_only_statements_pass() {
        assert!(check_read_only("SELECT * FROM rooms;").is_ok());
        assert!(check_read_only("  select id from users").is_ok());
        assert!(check_read_only("WITH t AS (SELECT 1) SELECT * FROM t").is_ok());
        assert!(check_read_only("explain select 1").is_ok());
        assert!(check_read_only("SHOW tables;").is_ok());
        assert!(check_read_only("(SELECT 1)").is_ok());
    }

    #[test]
    fn test_writes_are_refused() {
        for sql in [
            "DELETE FROM users",
            "drop table rooms;",
            "UPDATE rooms SET status = 'BOS'",
            "INSERT INTO x VALUES (1)",
            "EXPLAIN ANALYZE DELETE FROM users",
            "explain (analyze) select 1",
            "WITH d AS (DELETE FROM users RETURNING *) SELECT * FROM d",
            "SELECT * INTO backup_users FROM users",
            "SELECT 1 /* ; */; TRUNCATE reservations",
        ] {
            assert_eq!(check_read_only(sql), Err(ValidationError::StatementNotAllowed), "{}", sql);
        }
    }

    #[test]
    fn test_comments_and_literals_are_ignored() {
        assert!(check_read_only("SELECT 1 -- trailing; note").is_ok());
        assert!(check_read_only("SELECT 1 /* drop; table */;").is_ok());
        assert!(check_read_only("SELECT * FROM rooms WHERE name = 'DELETE FROM users'").is_ok());
        assert!(check_read_only("SELECT created_at, updated_at FROM reservations").is_ok());
        assert_eq!(check_read_only("-- only a comment"), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_multiple_statements_are_refused() {
        assert_eq!(
            check_read_only("SELECT 1; DROP TABLE users;"),
            Err(ValidationError::StatementNotAllowed)
        );
        // Semicolon inside a literal is fine
        assert!(check_read_only("SELECT * FROM rooms WHERE name = 'a;b';").is_ok());
    }

    #[test]
    fn test_empty_query_rejected() {
        assert_eq!(check_read_only("   \n"), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_examples_are_read_only() {
        for (label, sql) in EXAMPLE_QUERIES {
            assert!(check_read_only(sql).is_ok(), "{}", label);
        }
    }

    #[test]
    fn test_history_dedups_and_caps() {
        let mut history = QueryHistory::default();
        for i in 0..12 {
            history.record(&format!("SELECT {}", i));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries().next().unwrap(), "SELECT 11");
        assert!(!history.entries().any(|q| q == "SELECT 0" || q == "SELECT 1"));

        history.record("SELECT 5");
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries().next().unwrap(), "SELECT 5");
        assert_eq!(history.entries().filter(|q| *q == "SELECT 5").count(), 1);
    }

    #[test]
    fn test_csv_quoting() {
        let result = SqlQueryResult {
            columns: vec!["id".to_string(), "name".to_string(), "note".to_string()],
            rows: vec![
                vec![json!(1), json!("Oda, A"), json!("say \"hi\"")],
                vec![json!(2), json!("line\nbreak"), Value::Null],
            ],
            row_count: 2,
        };

        let csv = to_csv(&result);

        assert_eq!(
            csv,
            "id,name,note\r\n1,\"Oda, A\",\"say \"\"hi\"\"\"\r\n2,\"line\nbreak\",\r\n"
        );
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(1718000000000), "query_result_1718000000000.csv");
    }
}
