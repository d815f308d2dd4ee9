use std::fmt;

/// Column separator between two padded cells
const GAP: &str = "  ";

/// Plain text table, every column left-aligned and padded to its widest cell
pub struct TextTable {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Missing cells render empty, extra cells are dropped
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(GAP);
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &widths, self.headers.iter().copied())?;
        for row in &self.rows {
            write_line(f, &widths, row.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligned() {
        let mut table = TextTable::new(&["Name", "Qty"]);
        table.push_row(vec!["BTC-LTC".to_string(), "1".to_string()]);
        table.push_row(vec!["ETH".to_string(), "12.5".to_string()]);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.to_string(),
            "Name     Qty\nBTC-LTC  1\nETH      12.5\n"
        );
    }

    #[test]
    fn test_render_header_only() {
        let table = TextTable::new(&["Order Date", "Order ID"]);
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "Order Date  Order ID\n");
    }

    #[test]
    fn test_push_row_normalizes_width() {
        let mut table = TextTable::new(&["A", "B", "C"]);
        table.push_row(vec!["x".to_string()]);
        table.push_row(vec![
            "1".to_string(),
            "2".to_string(),
            "3".to_string(),
            "4".to_string(),
        ]);
        assert_eq!(table.to_string(), "A  B  C\nx\n1  2  3\n");
    }
}
