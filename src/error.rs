//! Everything that can stop a table generation run. There is no recoverable error: generation
//! is a batch pass, so the first error aborts the whole run and nothing partial is emitted.

use std::fmt::{Display, Formatter};

use string_cache::DefaultAtom;

#[derive(Debug)]
pub enum IsaError {
  Io(std::io::Error),
  Json(serde_json::Error),
  /// The syntax string does not start with a word token, so it has no root mnemonic.
  MalformedSyntax {
    syntax: String
  },
  InvalidOpcode {
    syntax: String,
    hex: String
  },
  /// An operand's surface form is not one of the known addressing modes.
  UnrecognizedMode {
    mnemonic: DefaultAtom,
    syntax: String,
    operand: String
  },
  /// Instructions take zero, one or two operands. Anything else is rejected outright.
  UnsupportedArity {
    mnemonic: DefaultAtom,
    syntax: String,
    operands: usize,
    args: usize
  },
  UnalignedOperandWidth {
    mnemonic: DefaultAtom,
    syntax: String,
    bits: u32
  },
}

impl Display for IsaError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      IsaError::Io(err) => write!(f, "I/O error: {}", err),

      IsaError::Json(err) => write!(f, "malformed ISA definition: {}", err),

      IsaError::MalformedSyntax { syntax } => {
        write!(f, "`{}` does not start with a mnemonic.", syntax)
      }

      IsaError::InvalidOpcode { syntax, hex } => {
        write!(f, "`{}` has opcode `{}`, which is not a hex encoded byte.", syntax, hex)
      }

      IsaError::UnrecognizedMode { mnemonic, syntax, operand } => {
        write!(
          f,
          "Unrecognized addressing mode `{}` in `{}` (mnemonic {}).",
          operand, syntax, mnemonic
        )
      }

      IsaError::UnsupportedArity { mnemonic, syntax, operands, args } => {
        write!(
          f,
          "`{}` (mnemonic {}) has {} operands and {} declared args, at most 2 are supported.",
          syntax, mnemonic, operands, args
        )
      }

      IsaError::UnalignedOperandWidth { mnemonic, syntax, bits } => {
        write!(
          f,
          "`{}` (mnemonic {}) declares a {} bit operand, which is not a whole number of bytes.",
          syntax, mnemonic, bits
        )
      }

    }
  }
}

impl std::error::Error for IsaError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      IsaError::Io(err)   => Some(err),
      IsaError::Json(err) => Some(err),
      _                   => None
    }
  }
}

impl From<std::io::Error> for IsaError {
  fn from(err: std::io::Error) -> Self {
    IsaError::Io(err)
  }
}

impl From<serde_json::Error> for IsaError {
  fn from(err: serde_json::Error) -> Self {
    IsaError::Json(err)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unrecognized_mode_names_instruction_and_operand() {
    let err = IsaError::UnrecognizedMode {
      mnemonic: DefaultAtom::from("mov"),
      syntax: "MOV A, Z[%]".to_string(),
      operand: "Z[%]".to_string()
    };
    let message = err.to_string();
    assert!(message.contains("Z[%]"));
    assert!(message.contains("MOV A, Z[%]"));
    assert!(message.contains("mov"));
  }

  #[test]
  fn io_errors_keep_their_source() {
    use std::error::Error;

    let err = IsaError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("I/O error"));
  }

}
