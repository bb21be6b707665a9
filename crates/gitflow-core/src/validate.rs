//! Branch name and commit message validation
//!
//! Pure predicates, no side effects. The workflow uses them both for values
//! supplied on the command line and for interactive answers.

use std::fmt;

/// Characters git reserves in ref names that branch names must not contain.
pub const RESERVED_BRANCH_CHARS: &[char] = &['~', '^', ':', '?', '*', '[', '\\'];

/// Why a proposed branch name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchNameProblem {
    Empty,
    ReservedCharacter(char),
    LeadingSlash,
    TrailingSlash,
}

impl fmt::Display for BranchNameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchNameProblem::Empty => write!(f, "name is empty"),
            BranchNameProblem::ReservedCharacter(c) => {
                write!(f, "contains reserved character '{}'", c)
            }
            BranchNameProblem::LeadingSlash => write!(f, "begins with '/'"),
            BranchNameProblem::TrailingSlash => write!(f, "ends with '/'"),
        }
    }
}

/// Explain why `name` is not an acceptable branch name, if it isn't.
///
/// Internal slashes are allowed, so hierarchical names like `feature/login`
/// pass.
pub fn branch_name_problem(name: &str) -> Option<BranchNameProblem> {
    if name.is_empty() {
        return Some(BranchNameProblem::Empty);
    }
    if name.starts_with('/') {
        return Some(BranchNameProblem::LeadingSlash);
    }
    if name.ends_with('/') {
        return Some(BranchNameProblem::TrailingSlash);
    }
    name.chars()
        .find(|c| RESERVED_BRANCH_CHARS.contains(c))
        .map(BranchNameProblem::ReservedCharacter)
}

/// Check whether `name` is an acceptable branch name.
pub fn validate_branch_name(name: &str) -> bool {
    branch_name_problem(name).is_none()
}

/// Check whether `message` is an acceptable commit message.
///
/// Empty and whitespace-only messages are rejected.
pub fn validate_commit_message(message: &str) -> bool {
    !message.trim().is_empty()
}
