use miette::{Diagnostic, ErrReport};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error(transparent)]
    EmptyStack(#[from] EmptyStack),
    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperation),
}

impl StackError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }

    /// Name of the stack operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            StackError::EmptyStack(e) => e.operation,
            StackError::UnsupportedOperation(e) => e.operation,
        }
    }
}

impl From<StackError> for ErrReport {
    fn from(error: StackError) -> Self {
        match error {
            StackError::EmptyStack(e) => ErrReport::from(e),
            StackError::UnsupportedOperation(e) => ErrReport::from(e),
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("empty-stack")]
#[diagnostic(
    code(stack::empty_stack),
    help("[{}] Cannot {} on an empty stack", self.dbg_line, self.operation),
)]
pub struct EmptyStack {
    pub dbg_line: String,
    pub operation: &'static str,
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("unsupported-operation: unsuitable as hash key")]
#[diagnostic(
    code(stack::unsupported_operation),
    help("[{}] {} is not supported, a mutable stack must not be used as a hash key", self.dbg_line, self.operation),
)]
pub struct UnsupportedOperation {
    pub dbg_line: String,
    pub operation: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbg_line;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        let empty = StackError::EmptyStack(EmptyStack {
            dbg_line: dbg_line!(),
            operation: "pop",
        });
        let unsupported = StackError::UnsupportedOperation(UnsupportedOperation {
            dbg_line: dbg_line!(),
            operation: "hash_code",
        });

        assert_eq!(empty.to_string(), "empty-stack");
        assert_eq!(empty.operation(), "pop");
        assert_eq!(
            unsupported.to_string(),
            "unsupported-operation: unsuitable as hash key"
        );
        assert_eq!(unsupported.operation(), "hash_code");
    }

    #[test]
    fn into_report_keeps_diagnostic_code() {
        let report = StackError::EmptyStack(EmptyStack {
            dbg_line: dbg_line!(),
            operation: "top",
        })
        .into_err_report();

        let code = report.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("stack::empty_stack"));
    }
}
