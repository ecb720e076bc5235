/// Column-aligned plain text table.
///
/// Every column is as wide as its widest cell plus `padding`, and never
/// narrower than `min_width`. Trailing whitespace is stripped from each line.
#[derive(Debug, Clone)]
pub struct TextTable {
    rows: Vec<Vec<String>>,
    min_width: usize,
    padding: usize,
}

impl Default for TextTable {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl TextTable {
    pub fn new(min_width: usize, padding: usize) -> Self {
        Self {
            rows: Vec::new(),
            min_width,
            padding,
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count() + self.padding)
                    .fold(self.min_width, usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for row in &self.rows {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(cell);
                let fill = width.saturating_sub(cell.chars().count());
                line.extend(std::iter::repeat(' ').take(fill));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
