//! A human readable summary of the syntax of every instruction, grouped by mnemonic, with the
//! `%` placeholders spelled out as what they stand for:
//!
//! ```text
//! mov:
//!   MOV A, [adr]
//!   MOV A, X(ptr)Y
//!   MOV A, imm
//! ```

use std::fmt::{Display, Formatter};

use string_cache::DefaultAtom;

use crate::group::InstructionGroups;

/// Replaces placeholders with descriptive labels. Bracketed forms go first so that their `%`
/// is not taken for an immediate.
pub fn describe_operands(syntax: &str) -> String {
  syntax.replace("[%]", "[adr]")
        .replace("(%)", "(ptr)")
        .replace('%', "imm")
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperandListing {
  entries: Vec<(DefaultAtom, Vec<String>)>
}

impl OperandListing {

  pub fn build(groups: &InstructionGroups) -> OperandListing {
    let entries = groups
      .iter()
      .map(
        |group| (
          group.mnemonic.clone(),
          group.instructions.iter().map(|def| describe_operands(&def.name)).collect()
        )
      )
      .collect();

    OperandListing{ entries }
  }

  pub fn get(&self, mnemonic: &str) -> Option<&[String]> {
    self.entries
        .iter()
        .find(|(name, _)| str::eq_ignore_ascii_case(name, mnemonic))
        .map(|(_, lines)| lines.as_slice())
  }

}

impl Display for OperandListing {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for (mnemonic, lines) in self.entries.iter() {
      writeln!(f, "{}:", mnemonic)?;
      for line in lines {
        writeln!(f, "  {}", line)?;
      }
    }
    Ok(())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  use crate::isa::InstructionDef;

  #[test]
  fn placeholders() {
    assert_eq!(describe_operands("PSH %"), "PSH imm");
    assert_eq!(describe_operands("MOV A, [%]"), "MOV A, [adr]");
    assert_eq!(describe_operands("MOV A, Y[%]"), "MOV A, Y[adr]");
    assert_eq!(describe_operands("CALL (%)"), "CALL (ptr)");
    assert_eq!(describe_operands("MOV X(%)Y, A"), "MOV X(ptr)Y, A");
    assert_eq!(describe_operands("RET"), "RET");
  }

  #[test]
  fn listing_per_mnemonic() {
    let defs = vec![
      InstructionDef::new("CALL %", "02", &[16]),
      InstructionDef::new("RET", "03", &[]),
      InstructionDef::new("CALL (%)", "6C", &[16]),
    ];
    let groups = InstructionGroups::group(&defs).unwrap();
    let listing = OperandListing::build(&groups);

    assert_eq!(listing.get("call").unwrap(), &["CALL imm".to_string(), "CALL (ptr)".to_string()]);
    assert_eq!(listing.to_string(), "call:\n  CALL imm\n  CALL (ptr)\nret:\n  RET\n");
  }

}
