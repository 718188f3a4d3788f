// ==========================================
// Nikora Promo Orders - Column Guessing
// ==========================================
// First-match heuristic over an ordered preference list;
// backs the interactive variant where pickers start on a
// best guess instead of a locked name
// ==========================================

use crate::domain::DataTable;

pub struct ColumnResolver;

impl ColumnResolver {
    /// First candidate present in the table's header, else the first column
    ///
    /// Matching is exact. Returns None only for a table without columns.
    pub fn guess(&self, table: &DataTable, candidates: &[&str]) -> Option<String> {
        for candidate in candidates {
            if table.has_column(candidate) {
                return Some((*candidate).to_string());
            }
        }
        table.columns.first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(columns: &[&str]) -> DataTable {
        DataTable::new(columns.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_guess_prefers_earlier_candidate() {
        let table = table_with(&["id", "Штрихкод", "Код EAN/UPC"]);
        let resolver = ColumnResolver;

        let guessed = resolver.guess(&table, &["Код EAN/UPC", "Штрихкод"]);
        assert_eq!(guessed, Some("Код EAN/UPC".to_string()));
    }

    #[test]
    fn test_guess_falls_back_to_first_column() {
        let table = table_with(&["id", "amount"]);
        let resolver = ColumnResolver;

        let guessed = resolver.guess(&table, &["Код EAN/UPC", "Штрихкод"]);
        assert_eq!(guessed, Some("id".to_string()));
    }

    #[test]
    fn test_guess_is_exact_match() {
        let table = table_with(&["завод", "id"]);
        let resolver = ColumnResolver;

        // No case folding: the Ru header differs in case, fall back
        let guessed = resolver.guess(&table, &["Завод"]);
        assert_eq!(guessed, Some("завод".to_string()));
    }

    #[test]
    fn test_guess_empty_table() {
        let table = DataTable::default();
        let resolver = ColumnResolver;

        assert_eq!(resolver.guess(&table, &["Завод"]), None);
    }
}
