//! Document content analysis: heading detection, keyword ranking and
//! structural statistics over already extracted page text.

mod headings;
mod keywords;
mod options;
mod structure;

pub use headings::HeadingDetector;
pub use keywords::KeywordExtractor;
pub use options::{AnalysisOptions, DEFAULT_STOPWORDS};
pub use structure::{count_words, Analyzer, ContentReport};
