pub mod analyzer;
pub mod comparator;
pub mod report_writer;
pub mod status_poller;
pub mod uploader;

pub use analyzer::analyze_answer_quality;
pub use comparator::{Comparator, ComparisonPair};
pub use report_writer::{print_summary, read_report, write_report};
pub use status_poller::{PollOutcome, StatusPoller};
pub use uploader::upload_document;
