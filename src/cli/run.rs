use linked_stack::Stack;
use miette::{Diagnostic, Result};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("unknown-operation")]
#[diagnostic(
    code(cli::unknown_operation),
    help("{:?} is not an operation, expected one of push=<value>, pop, top, clear, len, print, list", self.op),
)]
pub struct UnknownOperation {
    pub op: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op<'a> {
    Push(&'a str),
    Pop,
    Top,
    Clear,
    Len,
    Print,
    List,
}

impl<'a> Op<'a> {
    pub fn parse(op: &'a str) -> Result<Self, UnknownOperation> {
        if let Some(value) = op.strip_prefix("push=") {
            return Ok(Op::Push(value));
        }

        match op {
            "pop" => Ok(Op::Pop),
            "top" => Ok(Op::Top),
            "clear" => Ok(Op::Clear),
            "len" => Ok(Op::Len),
            "print" => Ok(Op::Print),
            "list" => Ok(Op::List),
            _ => Err(UnknownOperation { op: op.to_string() }),
        }
    }
}

/// Runs `ops` against a fresh stack, appending each produced value to `out`.
/// Stops at the first failing operation.
pub fn run_ops(ops: &[&str], out: &mut Vec<String>) -> Result<Stack<String>> {
    let mut stack = Stack::new();

    for (i, op) in ops.iter().enumerate() {
        let op = Op::parse(op)?;
        tracing::debug!(index = i, ?op, len = stack.len(), "executing");

        match op {
            Op::Push(value) => stack.push(value.to_string()),
            Op::Pop => out.push(stack.pop()?),
            Op::Top => out.push(stack.top()?.clone()),
            Op::Clear => stack.clear(),
            Op::Len => out.push(stack.len().to_string()),
            Op::Print => out.push(stack.to_string()),
            Op::List => out.extend(stack.iter()),
        }
    }

    Ok(stack)
}
