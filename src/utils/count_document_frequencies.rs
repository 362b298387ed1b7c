use crate::types::{DocumentFrequencyMap, Token};
use std::collections::HashSet;

/// Counts, for every token, the number of documents it appears in.
///
/// Repeats of a token within the same document count once.
///
/// # Arguments
/// * `documents` - The tokens of each document.
///
/// # Returns
/// * A `HashMap` where the keys are tokens and the values are the number of
///   documents containing them.
pub fn count_document_frequencies<I>(documents: I) -> DocumentFrequencyMap
where
    I: IntoIterator<Item = Vec<Token>>,
{
    let mut frequencies = DocumentFrequencyMap::new();

    for document in documents {
        let distinct: HashSet<Token> = document.into_iter().collect();

        for token in distinct {
            *frequencies.entry(token).or_insert(0) += 1;
        }
    }

    frequencies
}
