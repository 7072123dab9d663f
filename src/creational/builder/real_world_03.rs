// Builder - SQL query builders.
// MySQL and Postgres share every step except how LIMIT is spelled, so the
// dialect is a type parameter and the builder itself is written once.

use std::io::Write;
use std::marker::PhantomData;

use crate::{PatternError, Result};

pub trait SqlDialect {
    fn limit_clause(start: usize, offset: usize) -> String;
}

pub struct MySql;

impl SqlDialect for MySql {
    fn limit_clause(start: usize, offset: usize) -> String {
        format!(" LIMIT {start},{offset}")
    }
}

pub struct Postgres;

impl SqlDialect for Postgres {
    fn limit_clause(start: usize, offset: usize) -> String {
        format!(" LIMIT {start} OFFSET {offset}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statement {
    Select,
    Update,
    Delete,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct SqlQuery {
    statement: Option<Statement>,
    base: String,
    conditions: Vec<String>,
    limit: Option<String>,
}

pub trait SqlQueryBuilder {
    fn select(&mut self, table: &str, fields: &[&str]) -> &mut dyn SqlQueryBuilder;
    fn update(&mut self, table: &str, assignments: &[(&str, &str)]) -> &mut dyn SqlQueryBuilder;
    fn delete(&mut self, table: &str) -> &mut dyn SqlQueryBuilder;

    /// Conditions accumulate and are joined with `AND`.
    fn where_clause(
        &mut self,
        field: &str,
        value: &str,
        operator: &str,
    ) -> Result<&mut dyn SqlQueryBuilder>;

    fn limit(&mut self, start: usize, offset: usize) -> Result<&mut dyn SqlQueryBuilder>;

    fn sql(&self) -> Result<String>;

    fn where_eq(&mut self, field: &str, value: &str) -> Result<&mut dyn SqlQueryBuilder> {
        self.where_clause(field, value, "=")
    }
}

pub struct QueryBuilder<D> {
    query: SqlQuery,
    _dialect: PhantomData<D>,
}

pub type MySqlQueryBuilder = QueryBuilder<MySql>;
pub type PostgresQueryBuilder = QueryBuilder<Postgres>;

impl<D> QueryBuilder<D> {
    pub fn new() -> Self {
        Self {
            query: SqlQuery::default(),
            _dialect: PhantomData,
        }
    }

    fn start(&mut self, statement: Statement, base: String) {
        self.query = SqlQuery {
            statement: Some(statement),
            base,
            ..SqlQuery::default()
        };
    }
}

impl<D> Default for QueryBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: SqlDialect + 'static> SqlQueryBuilder for QueryBuilder<D> {
    fn select(&mut self, table: &str, fields: &[&str]) -> &mut dyn SqlQueryBuilder {
        self.start(
            Statement::Select,
            format!("SELECT {} FROM {table}", fields.join(",")),
        );
        self
    }

    fn update(&mut self, table: &str, assignments: &[(&str, &str)]) -> &mut dyn SqlQueryBuilder {
        let set = assignments
            .iter()
            .map(|(field, value)| format!("{field} = '{value}'"))
            .collect::<Vec<_>>()
            .join(", ");
        self.start(Statement::Update, format!("UPDATE {table} SET {set}"));
        self
    }

    fn delete(&mut self, table: &str) -> &mut dyn SqlQueryBuilder {
        self.start(Statement::Delete, format!("DELETE FROM {table}"));
        self
    }

    fn where_clause(
        &mut self,
        field: &str,
        value: &str,
        operator: &str,
    ) -> Result<&mut dyn SqlQueryBuilder> {
        match self.query.statement {
            Some(Statement::Select | Statement::Update | Statement::Delete) => {
                self.query
                    .conditions
                    .push(format!("{field} {operator} '{value}'"));
                Ok(self)
            }
            None => Err(PatternError::InvalidClause {
                clause: "WHERE",
                allowed: "SELECT, UPDATE, DELETE",
            }),
        }
    }

    fn limit(&mut self, start: usize, offset: usize) -> Result<&mut dyn SqlQueryBuilder> {
        match self.query.statement {
            Some(Statement::Select) => {
                self.query.limit = Some(D::limit_clause(start, offset));
                Ok(self)
            }
            _ => Err(PatternError::InvalidClause {
                clause: "LIMIT",
                allowed: "SELECT",
            }),
        }
    }

    fn sql(&self) -> Result<String> {
        if self.query.statement.is_none() {
            return Err(PatternError::EmptyQuery);
        }

        let mut sql = self.query.base.clone();
        if !self.query.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.query.conditions.join(" AND "));
        }
        if let Some(limit) = &self.query.limit {
            sql.push_str(limit);
        }
        sql.push(';');
        Ok(sql)
    }
}

pub struct Application {
    builder: Box<dyn SqlQueryBuilder>,
}

impl Application {
    pub fn new(builder: Box<dyn SqlQueryBuilder>) -> Self {
        Self { builder }
    }

    pub fn query(&mut self) -> Result<String> {
        self.builder
            .select("users", &["name", "email", "password"])
            .where_clause("age", "18", ">")?
            .where_clause("age", "30", "<")?
            .limit(10, 20)?
            .sql()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Testing MySQL query builder:")?;
    let mut mysql = Application::new(Box::new(MySqlQueryBuilder::new()));
    writeln!(out, "{}", mysql.query()?)?;

    writeln!(out)?;

    writeln!(out, "Testing PostgresSQL query builder:")?;
    let mut postgres = Application::new(Box::new(PostgresQueryBuilder::new()));
    writeln!(out, "{}", postgres.query()?)?;
    Ok(())
}
