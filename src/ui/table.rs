use tabled::builder::Builder;
use tabled::settings::Style;

/// Small ad-hoc tables (diagnostics, object summaries)
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Short rows are padded with empty cells.
    pub fn add_row(&mut self, cells: Vec<String>) {
        let mut cells = cells;
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }
        builder.build().with(Style::rounded()).to_string()
    }
}

pub fn key_value_table(key_header: &str, value_header: &str, pairs: &[(String, String)]) -> String {
    let mut builder = TableBuilder::new(&[key_header, value_header]);
    for (key, value) in pairs {
        builder.add_row(vec![key.clone(), value.clone()]);
    }
    builder.build()
}
