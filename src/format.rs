//! Classification and parsing of tabular backend answers.
//!
//! The query backend answers in free text. Answers that carry survey
//! tables come back as tab-delimited lines: either a simple two-column
//! count table (with `Base` and `Total` rows) or a multi-column summary
//! grid with a header line. [`classify`] sniffs the text for which
//! shape it looks like, and the renderers parse the matching shape into
//! a [`ParsedTable`] the chat page can lay out. Misclassification is
//! possible and is not an error; every failure path falls back to
//! showing the original text.

/// Classification of a raw backend response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Two-column (category, value) count table with Base/Total rows.
    CountTable,

    /// Multi-column summary grid with a header line.
    GridTable,

    /// No table detected; the text is displayed as-is.
    PlainText,
}

/// A single parsed table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cell values in order, split on tabs and trimmed.
    pub cells: Vec<String>,

    /// Base and Total rows are rendered bold.
    pub emphasized: bool,
}

/// Rows parsed out of a tab-delimited response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Synthesized header row: a blank corner cell for the row-label
    /// column followed by the column headers. Present for grids only.
    pub header: Option<Vec<String>>,

    /// Data rows in display order.
    pub rows: Vec<TableRow>,
}

/// What the caller should display for one chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPayload {
    /// No table detected (or parsing bailed out); show the original text.
    Text(String),

    /// A parsed table, tagged with its format so the caller can pick
    /// the matching layout.
    Table {
        format: TableFormat,
        table: ParsedTable,
    },
}

/// Decide which shape a raw response looks like.
///
/// Substring sniffing, not a grammar. The order of the checks matters:
/// a response that mentions "summary" and also contains Base/Total rows
/// is a grid, so the grid check runs first.
///
/// # Arguments
/// * `content` - The raw response text from the query backend
///
/// # Returns
/// * `TableFormat` - One of the three formats; never fails
pub fn classify(content: &str) -> TableFormat {
    let lower = content.to_lowercase();

    if content.contains('\t') && (lower.contains("summary") || lower.contains("grid")) {
        return TableFormat::GridTable;
    }

    if content.contains("Base") && content.contains("Total") {
        return TableFormat::CountTable;
    }

    TableFormat::PlainText
}

/// Parse a simple (category, value) count table.
///
/// Expects lines of the form `category<TAB>value`. Lines that do not
/// yield two non-empty fields are silently skipped. Rows stay in the
/// order they arrived; Base and Total rows are only emphasized, never
/// moved.
///
/// # Returns
/// * `Option<ParsedTable>` - The parsed rows, or `None` when the text
///   does not meet the count-table preconditions (a tab character and
///   the literal `Base`)
pub fn render_count(content: &str) -> Option<ParsedTable> {
    if !content.contains('\t') || !content.contains("Base") {
        return None;
    }

    let mut rows = Vec::new();
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields = line.split('\t');
        let category = fields.next().map(str::trim).unwrap_or("");
        let value = fields.next().map(str::trim).unwrap_or("");

        // Not a (category, value) pair; skip the line.
        if category.is_empty() || value.is_empty() {
            continue;
        }

        rows.push(TableRow {
            emphasized: category == "Base" || category == "Total",
            cells: vec![category.to_string(), value.to_string()],
        });
    }

    Some(ParsedTable { header: None, rows })
}

/// Parse a multi-column summary grid.
///
/// The first non-empty line supplies the column headers; a blank corner
/// cell is synthesized for the row-label column. Data rows keep empty
/// cells so positions line up with the headers. The first row labelled
/// `Base` is hoisted to the top of the body and emphasized; `Total`
/// rows are emphasized in place. Rows whose width disagrees with the
/// header are passed through untouched.
///
/// # Returns
/// * `Option<ParsedTable>` - The parsed grid, or `None` when the text
///   contains no tab character (or no non-empty line at all)
pub fn render_grid(content: &str) -> Option<ParsedTable> {
    if !content.contains('\t') {
        return None;
    }

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header_line = lines.next()?;

    let mut header = vec![String::new()];
    header.extend(
        header_line
            .split('\t')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string),
    );

    let mut rows: Vec<TableRow> = lines
        .map(|line| {
            let cells: Vec<String> = line.split('\t').map(|cell| cell.trim().to_string()).collect();
            TableRow {
                emphasized: cells.first().is_some_and(|cell| cell == "Total"),
                cells,
            }
        })
        .collect();

    // The Base row moves to the top of the body so sample sizes read first.
    if let Some(index) = rows
        .iter()
        .position(|row| row.cells.first().is_some_and(|cell| cell == "Base"))
    {
        let mut base = rows.remove(index);
        base.emphasized = true;
        rows.insert(0, base);
    }

    Some(ParsedTable {
        header: Some(header),
        rows,
    })
}

/// Top-level dispatch: classify a response and parse it if tabular.
///
/// Never errors. A classification whose renderer then declines (returns
/// `None`) falls back to the original text unchanged.
pub fn format_table_content(content: &str) -> DisplayPayload {
    let format = classify(content);

    let table = match format {
        TableFormat::GridTable => render_grid(content),
        TableFormat::CountTable => render_count(content),
        TableFormat::PlainText => None,
    };

    match table {
        Some(table) => DisplayPayload::Table { format, table },
        None => DisplayPayload::Text(content.to_string()),
    }
}
