/// Column layout of a Mint transaction export, in file order.
pub const MINT_COLUMNS: [&str; 9] = [
    "Date",
    "Description",
    "Original Description",
    "Amount",
    "Transaction Type",
    "Category",
    "Account Name",
    "Labels",
    "Notes",
];

pub const AMOUNT: &str = "Amount";
pub const TRANSACTION_TYPE: &str = "Transaction Type";
pub const CATEGORY: &str = "Category";

/// Ordered column names for one pipeline run. Each file gets its own copy
/// from [`Header::mint`]; transforms only ever touch that copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn mint() -> Self {
        Self {
            columns: MINT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Drop `column`, returning the index it occupied.
    pub fn remove(&mut self, column: &str) -> Option<usize> {
        let idx = self.position(column)?;
        self.columns.remove(idx);
        Some(idx)
    }
}

/// One transaction row. Values line up with the [`Header`] it was read
/// against; lookups by column name go through that header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, header: &Header, column: &str) -> Option<&str> {
        let idx = header.position(column)?;
        self.values.get(idx).map(String::as_str)
    }

    pub(crate) fn value_at_mut(&mut self, idx: usize) -> Option<&mut String> {
        self.values.get_mut(idx)
    }

    pub(crate) fn remove_at(&mut self, idx: usize) {
        if idx < self.values.len() {
            self.values.remove(idx);
        }
    }
}

#[cfg(test)]
pub(crate) fn mint_record(amount: &str, txn_type: &str, category: &str) -> Record {
    Record::new(
        [
            "1/02/2023",
            "Coffee Shop",
            "COFFEE SHOP #12",
            amount,
            txn_type,
            category,
            "Checking",
            "",
            "",
        ]
        .iter()
        .map(|v| v.to_string())
        .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_header_has_nine_columns() {
        let header = Header::mint();
        assert_eq!(header.len(), 9);
        assert_eq!(header.position(TRANSACTION_TYPE), Some(4));
        assert_eq!(header.position(CATEGORY), Some(5));
    }

    #[test]
    fn test_header_copies_are_independent() {
        let mut first = Header::mint();
        let second = Header::mint();
        first.remove(TRANSACTION_TYPE);
        assert_eq!(first.len(), 8);
        assert_eq!(second.len(), 9);
        assert_eq!(first.position(CATEGORY), Some(4));
    }

    #[test]
    fn test_header_remove_missing_column() {
        let mut header = Header::mint();
        assert_eq!(header.remove("Memo"), None);
        assert_eq!(header.len(), 9);
    }

    #[test]
    fn test_record_get_by_column() {
        let header = Header::mint();
        let mut record = mint_record("4.50", "debit", "Coffee Shops");
        assert_eq!(record.get(&header, AMOUNT), Some("4.50"));
        *record.value_at_mut(5).unwrap() = "Dining".to_string();
        assert_eq!(record.get(&header, CATEGORY), Some("Dining"));
        assert_eq!(record.get(&header, "Memo"), None);
    }
}
