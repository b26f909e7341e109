//! Explicit select specifications.
//!
//! Every catalog query is described as a [`Select`]: the driving table, each
//! joined table with its join kind and equality keys, filters, grouping,
//! ordering and limit. Nothing is inferred from declared relationships, so
//! the join graph of a query is readable at its construction site and
//! testable as rendered SQL.
//!
//! Filters carry numbered placeholders (`?1`, `?2`); values are bound by the
//! caller. A placeholder may appear more than once, including inside a
//! derived table, and binds the same value everywhere.

/// How a joined source is combined with the rows so far.
///
/// The catalog only uses inner joins: an entity without matching grade rows
/// never appears in a grade-based result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Rows without a match on both sides are dropped.
    Inner,
}

impl JoinKind {
    const fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
        }
    }
}

/// A joinable row source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Table(String),
    /// A nested select used as a derived table.
    Derived(Box<Select>),
}

/// One join edge: `<kind> <source> AS <alias> ON l1 = r1 AND l2 = r2 ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub source: Source,
    pub alias: String,
    pub on: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    columns: Vec<String>,
    from: String,
    from_alias: String,
    joins: Vec<Join>,
    filters: Vec<String>,
    group_by: Vec<String>,
    order_by: Vec<String>,
    limit: Option<u32>,
}

fn keys(on: &[(&str, &str)]) -> Vec<(String, String)> {
    on.iter()
        .map(|(l, r)| ((*l).to_string(), (*r).to_string()))
        .collect()
}

impl Select {
    /// Start a select driven by `table AS alias`.
    #[must_use]
    pub fn from(table: &str, alias: &str) -> Self {
        Self {
            columns: Vec::new(),
            from: table.to_string(),
            from_alias: alias.to_string(),
            joins: Vec::new(),
            filters: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    #[must_use]
    pub fn column(mut self, expr: &str) -> Self {
        self.columns.push(expr.to_string());
        self
    }

    /// Inner-join a table on one or more equality keys.
    #[must_use]
    pub fn join(self, table: &str, alias: &str, on: &[(&str, &str)]) -> Self {
        self.push_join(JoinKind::Inner, Source::Table(table.to_string()), alias, on)
    }

    /// Inner-join a derived table built from another select.
    #[must_use]
    pub fn join_derived(self, select: Self, alias: &str, on: &[(&str, &str)]) -> Self {
        self.push_join(JoinKind::Inner, Source::Derived(Box::new(select)), alias, on)
    }

    fn push_join(mut self, kind: JoinKind, source: Source, alias: &str, on: &[(&str, &str)]) -> Self {
        self.joins.push(Join {
            kind,
            source,
            alias: alias.to_string(),
            on: keys(on),
        });
        self
    }

    /// Add a predicate; predicates are combined with `AND`.
    #[must_use]
    pub fn filter(mut self, predicate: &str) -> Self {
        self.filters.push(predicate.to_string());
        self
    }

    #[must_use]
    pub fn group_by(mut self, expr: &str) -> Self {
        self.group_by.push(expr.to_string());
        self
    }

    #[must_use]
    pub fn order_by(mut self, expr: &str) -> Self {
        self.order_by.push(expr.to_string());
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The join edges, in application order.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Render as a single-line SQL statement.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut clauses = vec![
            format!("SELECT {}", self.columns.join(", ")),
            format!("FROM {} AS {}", self.from, self.from_alias),
        ];
        clauses.extend(self.joins.iter().map(Join::to_sql));

        if !self.filters.is_empty() {
            clauses.push(format!("WHERE {}", self.filters.join(" AND ")));
        }
        if !self.group_by.is_empty() {
            clauses.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }
        if !self.order_by.is_empty() {
            clauses.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {limit}"));
        }
        clauses.join(" ")
    }
}

impl Join {
    fn to_sql(&self) -> String {
        let source = match &self.source {
            Source::Table(table) => table.clone(),
            Source::Derived(select) => format!("({})", select.to_sql()),
        };
        let on = self
            .on
            .iter()
            .map(|(l, r)| format!("{l} = {r}"))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!("{} {source} AS {} ON {on}", self.kind.keyword(), self.alias)
    }
}
