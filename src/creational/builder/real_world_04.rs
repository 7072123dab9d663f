// Builder - storage query builders.
// The client composes filter/limit steps once; each builder replays them
// against its own storage provider.

use std::fmt;
use std::io::Write;

use crate::Result;

pub trait DomainModel: Clone + 'static {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl User {
    pub fn new(id: u32, name: &str, email: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

impl DomainModel for User {}

pub enum Operation<M> {
    Filter(Box<dyn Fn(&M) -> bool>),
    Limit(usize),
}

impl<M> fmt::Display for Operation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Filter(_) => f.write_str("Filter"),
            Operation::Limit(_) => f.write_str("Limit"),
        }
    }
}

pub trait QueryBuilder<M: DomainModel> {
    fn filter(&mut self, predicate: Box<dyn Fn(&M) -> bool>) -> &mut dyn QueryBuilder<M>;
    fn limit(&mut self, limit: usize) -> &mut dyn QueryBuilder<M>;

    /// Runs the recorded operations and clears them.
    fn fetch(&mut self, out: &mut dyn Write) -> Result<Vec<M>>;
}

/// A storage backend; `builder` is the name of the builder that drives it.
struct Provider {
    name: &'static str,
    builder: &'static str,
}

impl Provider {
    fn fetch<M: DomainModel>(
        &self,
        records: &[M],
        operations: &[Operation<M>],
        out: &mut dyn Write,
    ) -> Result<Vec<M>> {
        writeln!(
            out,
            "{}: Initializing {}Provider with {} operations.",
            self.builder,
            self.name,
            operations.len()
        )?;
        writeln!(out, "{}Provider: Retrieving data from {}.", self.name, self.name)?;

        let mut results: Vec<M> = records.to_vec();
        for operation in operations {
            writeln!(out, "{}Provider: Executing the {operation} operation.", self.name)?;
            match operation {
                Operation::Filter(predicate) => results.retain(|record| predicate(record)),
                Operation::Limit(limit) => results.truncate(*limit),
            }
        }
        Ok(results)
    }
}

macro_rules! storage_query_builder {
    ($builder:ident, $provider:literal) => {
        pub struct $builder<M> {
            records: Vec<M>,
            operations: Vec<Operation<M>>,
        }

        impl<M: DomainModel> $builder<M> {
            pub fn new() -> Self {
                Self::with_records(Vec::new())
            }

            pub fn with_records(records: Vec<M>) -> Self {
                Self {
                    records,
                    operations: Vec::new(),
                }
            }
        }

        impl<M: DomainModel> Default for $builder<M> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<M: DomainModel> QueryBuilder<M> for $builder<M> {
            fn filter(&mut self, predicate: Box<dyn Fn(&M) -> bool>) -> &mut dyn QueryBuilder<M> {
                self.operations.push(Operation::Filter(predicate));
                self
            }

            fn limit(&mut self, limit: usize) -> &mut dyn QueryBuilder<M> {
                self.operations.push(Operation::Limit(limit));
                self
            }

            fn fetch(&mut self, out: &mut dyn Write) -> Result<Vec<M>> {
                let operations = std::mem::take(&mut self.operations);
                let provider = Provider {
                    name: $provider,
                    builder: stringify!($builder),
                };
                provider.fetch(&self.records, &operations, out)
            }
        }
    };
}

storage_query_builder!(RealmQueryBuilder, "Realm");
storage_query_builder!(CoreDataQueryBuilder, "CoreData");

pub struct UserApplication {
    builder: Box<dyn QueryBuilder<User>>,
}

impl UserApplication {
    pub fn new(builder: Box<dyn QueryBuilder<User>>) -> Self {
        Self { builder }
    }

    pub fn query(&mut self, out: &mut dyn Write) -> Result<Vec<User>> {
        let results = self
            .builder
            .filter(Box::new(|user: &User| user.age < 20))
            .limit(1)
            .fetch(out)?;

        writeln!(out, "Client: I have fetched: {} records.", results.len())?;
        Ok(results)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Client: Start fetching data from Realm")?;
    UserApplication::new(Box::new(RealmQueryBuilder::new())).query(out)?;

    writeln!(out)?;

    writeln!(out, "Client: Start fetching data from CoreData")?;
    UserApplication::new(Box::new(CoreDataQueryBuilder::new())).query(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new(1, "Ana", "ana@example.com", 19),
            User::new(2, "Bruno", "bruno@example.com", 34),
            User::new(3, "Carla", "carla@example.com", 17),
        ]
    }

    #[test]
    fn test_realm_log_lines() {
        let mut out = Vec::new();
        UserApplication::new(Box::new(RealmQueryBuilder::new()))
            .query(&mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "RealmQueryBuilder: Initializing RealmProvider with 2 operations.\n\
             RealmProvider: Retrieving data from Realm.\n\
             RealmProvider: Executing the Filter operation.\n\
             RealmProvider: Executing the Limit operation.\n\
             Client: I have fetched: 0 records.\n"
        );
    }

    #[test]
    fn test_operations_apply_in_order() {
        let mut sink = Vec::new();
        let mut app =
            UserApplication::new(Box::new(CoreDataQueryBuilder::with_records(users())));
        let results = app.query(&mut sink).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Ana");
    }

    #[test]
    fn test_fetch_clears_operations() {
        let mut sink = Vec::new();
        let mut builder = RealmQueryBuilder::with_records(users());
        builder.limit(1);
        assert_eq!(builder.fetch(&mut sink).unwrap().len(), 1);
        assert_eq!(builder.fetch(&mut sink).unwrap().len(), 3);
    }
}
