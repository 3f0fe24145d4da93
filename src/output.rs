//! Output formatters (human and JSONL)

pub mod human;
pub mod jsonl;
pub mod summary;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use summary::{
    FormatterSummary, SummaryHumanFormatter, SummaryJsonlFormatter, ValidatorSummary,
    formatter_summaries, validator_summaries,
};
