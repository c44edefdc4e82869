const DELIMITER: &str = "|===";
const CELL_MARKER: char = '|';

/// AsciiDoc table with a fixed column-width spec.
///
/// Rows are not checked against the number of columns; callers keep them in
/// agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    widths: Vec<usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(widths: impl Into<Vec<usize>>) -> Self {
        Self {
            widths: widths.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_item(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn with_item(mut self, row: Vec<String>) -> Self {
        self.add_item(row);
        self
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn generate(&self) -> Vec<String> {
        let cols = self
            .widths
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut lines = vec![
            format!("[cols='{}']", cols),
            DELIMITER.to_string(),
            String::new(),
        ];
        for row in &self.rows {
            for cell in row {
                lines.push(format!("{}{}", CELL_MARKER, cell));
            }
            lines.push(String::new());
        }
        lines.push(DELIMITER.to_string());
        lines
    }
}
