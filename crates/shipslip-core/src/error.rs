use crate::keywords::KeywordKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} keyword list is empty")]
    EmptyKeywordList(KeywordKind),
    #[error("blank keyword in {0} list")]
    BlankKeyword(KeywordKind),
    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}
