/*!
  Partitions an instruction list by root mnemonic. All addressing mode variants of one logical
  instruction (`MOV A, X`, `MOV A, [%]`, ...) land in the same group. Groups iterate in the
  order their mnemonic is first seen, and each group keeps its members in input order.
*/

use std::collections::HashMap;

use string_cache::DefaultAtom;

use crate::error::IsaError;
use crate::isa::InstructionDef;
use crate::token::{intern_keyword, root_mnemonic};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstructionGroup<'a> {
  /// Lowercase root mnemonic.
  pub mnemonic     : DefaultAtom,
  pub instructions : Vec<&'a InstructionDef>,
}

#[derive(Clone, Debug)]
pub struct InstructionGroups<'a> {
  groups : Vec<InstructionGroup<'a>>,
  index  : HashMap<DefaultAtom, usize>,
}

impl<'a> InstructionGroups<'a> {

  pub fn group(instructions: &'a [InstructionDef]) -> Result<InstructionGroups<'a>, IsaError> {
    let mut groups: Vec<InstructionGroup<'a>> = Vec::new();
    let mut index: HashMap<DefaultAtom, usize> = HashMap::new();

    for instruction in instructions {
      let mnemonic = root_mnemonic(&instruction.name)?;
      let next_idx = groups.len();
      let idx = *index.entry(mnemonic.clone()).or_insert(next_idx);

      if idx == next_idx {
        groups.push(InstructionGroup{ mnemonic, instructions: Vec::new() });
      }
      groups[idx].instructions.push(instruction);
    }

    tracing::debug!(groups = groups.len(), instructions = instructions.len(), "grouped instructions");
    Ok(InstructionGroups{ groups, index })
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  /// Looks up a group by mnemonic, case insensitively.
  pub fn get(&self, mnemonic: &str) -> Option<&InstructionGroup<'a>> {
    self.index
        .get(&intern_keyword(mnemonic))
        .map(|&idx| &self.groups[idx])
  }

  pub fn iter(&self) -> std::slice::Iter<'_, InstructionGroup<'a>> {
    self.groups.iter()
  }

}
