use super::models::{CellValue, ResultSet};

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub query: String,
    pub result: ResultSet,
}

/// Read-only, ordered set of canned queries and the results shown for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleCatalog {
    samples: Vec<Sample>,
}

impl SampleCatalog {
    #[must_use]
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Sample {
                name: "Select All Users".to_string(),
                query: "SELECT * FROM users;".to_string(),
                result: ResultSet::new(
                    &["id", "name", "email", "created_at"],
                    vec![
                        vec![CellValue::Int(1), text("Rushi Trivedi"), text("rushi123@gmail.com"), text("2025-01-01")],
                        vec![CellValue::Int(2), text("Muralidhar Goparaju"), text("murali123@gmail.com"), text("2025-01-02")],
                        vec![CellValue::Int(3), text("Ashish Sharma"), text("ashish123@gmail.com"), text("2025-01-03")],
                        vec![CellValue::Int(4), text("Nitish Chhabra"), text("nitish123@example.com"), text("2025-01-03")],
                    ],
                ),
            },
            Sample {
                name: "User Orders".to_string(),
                query: "SELECT users.name, orders.order_id, orders.total\nFROM users\nJOIN orders ON users.id = orders.user_id;".to_string(),
                result: ResultSet::new(
                    &["name", "order_id", "total"],
                    vec![
                        vec![text("Omee Rai"), text("ORD-001"), text("$150.00")],
                        vec![text("Tanya Sehgal"), text("ORD-002"), text("$89.99")],
                        vec![text("Neha Singh"), text("ORD-003"), text("$299.99")],
                    ],
                ),
            },
            Sample {
                name: "Product Analytics".to_string(),
                query: "SELECT category, COUNT(*) as count, AVG(price) as avg_price\nFROM products\nGROUP BY category\nORDER BY count DESC;".to_string(),
                result: ResultSet::new(
                    &["category", "count", "avg_price"],
                    vec![
                        vec![text("Electronics"), CellValue::Int(150), text("$599.99")],
                        vec![text("Books"), CellValue::Int(120), text("$24.99")],
                        vec![text("Clothing"), CellValue::Int(100), text("$49.99")],
                    ],
                ),
            },
        ])
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.name == name)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(|s| s.name.as_str())
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.samples.iter().position(|s| s.name == name)
    }

    /// The sample after `name`, wrapping at the end. Unknown names start over
    /// from the first sample.
    #[must_use]
    pub fn next_after(&self, name: &str) -> Option<&Sample> {
        let idx = match self.position(name) {
            Some(i) => (i + 1) % self.samples.len(),
            None => 0,
        };
        self.samples.get(idx)
    }

    #[must_use]
    pub fn prev_before(&self, name: &str) -> Option<&Sample> {
        let idx = match self.position(name) {
            Some(0) => self.samples.len().checked_sub(1)?,
            Some(i) => i - 1,
            None => 0,
        };
        self.samples.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}
