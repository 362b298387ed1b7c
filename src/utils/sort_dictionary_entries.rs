use crate::DictionaryEntry;

/// Sorts dictionary entries for ranking.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by lift in descending order (most spam-associated first).
/// - **Secondary:** If two words have the same lift, sorts by word in ascending
///   lexicographical order for deterministic ordering.
pub fn sort_dictionary_entries(mut entries: Vec<DictionaryEntry>) -> Vec<DictionaryEntry> {
    entries.sort_by(|a, b| {
        b.lift
            .partial_cmp(&a.lift) // Sort by lift (descending)
            .unwrap_or(std::cmp::Ordering::Equal) // Handle NaN gracefully
            .then_with(|| a.word.cmp(&b.word)) // Secondary sort by word (ascending)
    });

    entries
}
