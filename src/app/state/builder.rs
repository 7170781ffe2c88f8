use crate::domain::builder::QueryBuilderForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderField {
    #[default]
    Table,
    Columns,
    Condition,
    OrderBy,
    Limit,
}

impl BuilderField {
    pub const ALL: [BuilderField; 5] = [
        BuilderField::Table,
        BuilderField::Columns,
        BuilderField::Condition,
        BuilderField::OrderBy,
        BuilderField::Limit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BuilderField::Table => "Table",
            BuilderField::Columns => "Columns",
            BuilderField::Condition => "WHERE",
            BuilderField::OrderBy => "ORDER BY",
            BuilderField::Limit => "LIMIT",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryBuilderState {
    pub form: QueryBuilderForm,
    pub focus: BuilderField,
}

impl QueryBuilderState {
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            BuilderField::Table => None,
            BuilderField::Columns => Some(&mut self.form.columns),
            BuilderField::Condition => Some(&mut self.form.condition),
            BuilderField::OrderBy => Some(&mut self.form.order_by),
            BuilderField::Limit => Some(&mut self.form.limit),
        }
    }

    /// Types into the focused field. LIMIT only takes digits and the table
    /// field takes nothing.
    pub fn push_char(&mut self, c: char) {
        if self.focus == BuilderField::Limit && !c.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub fn next_table(&mut self) {
        if self.focus == BuilderField::Table {
            self.form.table = self.form.table.next();
        }
    }

    pub fn prev_table(&mut self) {
        if self.focus == BuilderField::Table {
            self.form.table = self.form.table.prev();
        }
    }

    #[must_use]
    pub fn value_of(&self, field: BuilderField) -> &str {
        match field {
            BuilderField::Table => self.form.table.label(),
            BuilderField::Columns => &self.form.columns,
            BuilderField::Condition => &self.form.condition,
            BuilderField::OrderBy => &self.form.order_by,
            BuilderField::Limit => &self.form.limit,
        }
    }
}
