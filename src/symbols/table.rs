use std::fmt::Display;

/// Number of buckets in the symbol table. Fixed for the table's lifetime;
/// there is no rehashing or resize.
pub const MAX: usize = 500;

/// One recorded identifier occurrence. Entries are append-only: the same
/// identifier seen on several lines produces several entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub identifier: String,
    pub scope: String,
    pub type_: String,
    pub line: u32,
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Identifier: {}\nType: {}\nScope: {}\nLine: {}",
            self.identifier, self.type_, self.scope, self.line
        )
    }
}

/// Hash table of identifier occurrences with [`MAX`] buckets and chained
/// collisions. Each bucket keeps its entries in insertion order.
pub struct SymbolTable {
    buckets: Vec<Vec<SymbolEntry>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            buckets: vec![Vec::new(); MAX],
        }
    }

    /// Bucket index for an identifier: sum of its character codes mod [`MAX`].
    pub fn hash(id: &str) -> usize {
        id.chars().map(|c| c as usize).sum::<usize>() % MAX
    }

    /// Appends an entry at the tail of its bucket's chain. Never fails and
    /// never deduplicates.
    pub fn insert(&mut self, id: &str, scope: &str, type_: &str, line: u32) {
        self.buckets[Self::hash(id)].push(SymbolEntry {
            identifier: id.to_string(),
            scope: scope.to_string(),
            type_: type_.to_string(),
            line,
        });
    }

    /// Returns the bucket index holding an entry for `id`, or `None` when
    /// the chain is exhausted without a match. Callers needing the entry's
    /// details re-walk the bucket via [`SymbolTable::chain`].
    pub fn find(&self, id: &str) -> Option<usize> {
        let index = Self::hash(id);

        if self.buckets[index].iter().any(|entry| entry.identifier == id) {
            Some(index)
        } else {
            None
        }
    }

    /// The entries chained in one bucket, in insertion order.
    pub fn chain(&self, index: usize) -> &[SymbolEntry] {
        &self.buckets[index]
    }

    /// Total number of recorded entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
