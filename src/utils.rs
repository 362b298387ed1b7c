pub mod average_ranks;
pub use average_ranks::average_ranks;

pub mod count_document_frequencies;
pub use count_document_frequencies::count_document_frequencies;

pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod invert_matrix;
pub use invert_matrix::invert_matrix;

pub mod normal_p_value;
pub use normal_p_value::normal_two_sided_p_value;

pub mod sigmoid;
pub use sigmoid::sigmoid;

pub mod sort_dictionary_entries;
pub use sort_dictionary_entries::sort_dictionary_entries;
