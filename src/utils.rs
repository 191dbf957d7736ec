pub mod cosine_similarity;
pub use cosine_similarity::{
    cosine_similarity, cosine_similarity_from_parts, dot_product, squared_magnitude,
};

pub mod dedup_vector;
pub use dedup_vector::dedup_vector;

pub mod group_titles_by_user;
pub use group_titles_by_user::group_titles_by_user;

pub mod read_labeled_titles;
pub use read_labeled_titles::{read_labeled_titles_from_file, read_labeled_titles_from_string};

pub mod sort_results;
pub use sort_results::sort_scored_candidates;
