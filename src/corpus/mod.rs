//! Rule corpus: where the markdown files live and how they are read.

mod locator;
mod source;

pub use locator::{CorpusLocator, DEFAULT_EXTENSIONS};
pub use source::{FsRuleSource, RuleSource};
