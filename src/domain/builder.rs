#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderTable {
    #[default]
    Users,
    Orders,
    Products,
}

impl BuilderTable {
    pub const ALL: [BuilderTable; 3] = [
        BuilderTable::Users,
        BuilderTable::Orders,
        BuilderTable::Products,
    ];

    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            BuilderTable::Users => "users",
            BuilderTable::Orders => "orders",
            BuilderTable::Products => "products",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BuilderTable::Users => "Users",
            BuilderTable::Orders => "Orders",
            BuilderTable::Products => "Products",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The fields of the query builder panel. Everything except the table is
/// free text; `limit` only ever holds ASCII digits.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilderForm {
    pub table: BuilderTable,
    pub columns: String,
    pub condition: String,
    pub order_by: String,
    pub limit: String,
}

impl Default for QueryBuilderForm {
    fn default() -> Self {
        Self {
            table: BuilderTable::Users,
            columns: "*".to_string(),
            condition: String::new(),
            order_by: String::new(),
            limit: String::new(),
        }
    }
}

impl QueryBuilderForm {
    #[must_use]
    pub fn column_list(&self) -> Vec<String> {
        let columns: Vec<String> = self
            .columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if columns.is_empty() {
            vec!["*".to_string()]
        } else {
            columns
        }
    }

    #[must_use]
    pub fn generate(&self) -> String {
        let mut query = format!(
            "SELECT {} FROM {}",
            self.column_list().join(", "),
            self.table.as_sql()
        );
        let condition = self.condition.trim();
        if !condition.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(condition);
        }
        let order_by = self.order_by.trim();
        if !order_by.is_empty() {
            query.push_str(" ORDER BY ");
            query.push_str(order_by);
        }
        if !self.limit.is_empty() {
            query.push_str(" LIMIT ");
            query.push_str(&self.limit);
        }
        query.push(';');
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_selects_everything() {
        assert_eq!(QueryBuilderForm::default().generate(), "SELECT * FROM users;");
    }

    #[test]
    fn test_all_clauses() {
        let form = QueryBuilderForm {
            table: BuilderTable::Orders,
            columns: "order_id,  total ".to_string(),
            condition: "total > 100".to_string(),
            order_by: "total DESC".to_string(),
            limit: "10".to_string(),
        };
        assert_eq!(
            form.generate(),
            "SELECT order_id, total FROM orders WHERE total > 100 ORDER BY total DESC LIMIT 10;"
        );
    }

    #[test]
    fn test_blank_columns_fall_back_to_star() {
        let form = QueryBuilderForm {
            table: BuilderTable::Products,
            columns: " , ".to_string(),
            ..Default::default()
        };
        assert_eq!(form.generate(), "SELECT * FROM products;");
    }

    #[test]
    fn test_table_cycle() {
        assert_eq!(BuilderTable::Users.next(), BuilderTable::Orders);
        assert_eq!(BuilderTable::Products.next(), BuilderTable::Users);
        assert_eq!(BuilderTable::Users.prev(), BuilderTable::Products);
    }
}
