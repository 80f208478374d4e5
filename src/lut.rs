/*!
  The per mnemonic lookup table. For every root mnemonic, in group order, the assembler gets
  the resolved variants of that mnemonic in input order. To assemble `MOV A, [1234]` it finds
  the `mov` entry and picks the variant whose modes match the operands it parsed.
*/

use std::fmt::{Display, Formatter};

use prettytable::Table;
use string_cache::DefaultAtom;

use crate::error::IsaError;
use crate::format::TABLE_DISPLAY_FORMAT;
use crate::group::InstructionGroups;
use crate::isa::InstructionDef;
use crate::mode::{resolve, AddressingMode, ResolvedVariant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LutEntry {
  pub mnemonic : DefaultAtom,
  /// Number of variants, always `variants.len()`.
  pub num      : usize,
  pub variants : Vec<ResolvedVariant>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupTable {
  entries: Vec<LutEntry>
}

impl LookupTable {

  /// Resolves every instruction of every group. The first instruction that fails to resolve
  /// aborts the whole table.
  pub fn build(groups: &InstructionGroups) -> Result<LookupTable, IsaError> {
    LookupTable::build_with(groups, resolve)
  }

  pub fn build_with<F>(groups: &InstructionGroups, resolver: F) -> Result<LookupTable, IsaError>
    where F: Fn(&InstructionDef) -> Result<ResolvedVariant, IsaError>
  {
    let mut entries = Vec::with_capacity(groups.len());

    for group in groups.iter() {
      let variants = group.instructions
                          .iter()
                          .map(|&def| resolver(def))
                          .collect::<Result<Vec<ResolvedVariant>, IsaError>>()?;

      debug_assert_eq!(variants.len(), group.instructions.len());
      tracing::debug!(mnemonic = %group.mnemonic, variants = variants.len(), "resolved group");

      entries.push(LutEntry {
        mnemonic: group.mnemonic.clone(),
        num: variants.len(),
        variants
      });
    }

    Ok(LookupTable{ entries })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, mnemonic: &str) -> Option<&LutEntry> {
    self.entries.iter().find(|entry| str::eq_ignore_ascii_case(&entry.mnemonic, mnemonic))
  }

  pub fn iter(&self) -> std::slice::Iter<'_, LutEntry> {
    self.entries.iter()
  }

  pub fn to_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(
      row![ubl->"Mnemonic", ubr->"Num", ubr->"Opcode", ubr->"Args", ubr->"Words", ubl->"Modes"]
    );

    for entry in self.entries.iter() {
      for (i, variant) in entry.variants.iter().enumerate() {
        let (mnemonic, num) =
          match i == 0 {
            true  => (entry.mnemonic.to_string(), entry.num.to_string()),
            false => (String::new(), String::new())
          };
        let modes = variant.modes
                           .iter()
                           .map(AddressingMode::to_string)
                           .collect::<Vec<String>>()
                           .join(", ");

        table.add_row(row![
          mnemonic,
          r->num,
          r->format!("0x{:02X}", variant.opcode),
          r->variant.operand_count,
          r->variant.word_count,
          modes
        ]);
      }
    }
    table
  }

}

impl Display for LookupTable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_table())
  }
}
