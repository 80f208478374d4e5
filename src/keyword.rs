/*!
  The keyword table of an instruction set: every distinct word that can appear in its assembly
  source, each with a stable index. An assembler's tokenizer uses it to recognize mnemonics and
  register names.

  Root mnemonics come first, in the order their groups are first seen. The remaining words
  (register names and the like) follow in the order they first appear anywhere in the
  instruction list. A keyword table is really just a convenience wrapper around a BiMap.
*/

use bimap::BiMap;
use prettytable::Table;
use string_cache::DefaultAtom;

use crate::error::IsaError;
use crate::format::TABLE_DISPLAY_FORMAT;
use crate::isa::InstructionDef;
use crate::token::{intern_keyword, root_mnemonic, tokenize};

pub type KeywordId = usize;

pub struct KeywordRegistry {
  table: BiMap<DefaultAtom, KeywordId>
}

impl KeywordRegistry {

  pub fn build(instructions: &[InstructionDef]) -> Result<KeywordRegistry, IsaError> {
    let mut registry = KeywordRegistry{ table: BiMap::new() };

    for instruction in instructions {
      registry.insert(root_mnemonic(&instruction.name)?);
    }
    for instruction in instructions {
      for word in tokenize(&instruction.name) {
        registry.insert(word);
      }
    }

    tracing::debug!(keywords = registry.len(), "built keyword registry");
    Ok(registry)
  }

  /// Appends `keyword` unless it is already present.
  fn insert(&mut self, keyword: DefaultAtom) {
    let next_id = self.table.len();
    // An existing keyword keeps its first index.
    let _ = self.table.insert_no_overwrite(keyword, next_id);
  }

  pub fn len(&self) -> usize {
    self.table.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.is_empty()
  }

  /// Looks up a word case insensitively.
  pub fn id_of(&self, word: &str) -> Option<KeywordId> {
    self.table.get_by_left(&intern_keyword(word)).copied()
  }

  pub fn keyword(&self, id: KeywordId) -> Option<&DefaultAtom> {
    self.table.get_by_right(&id)
  }

  /// Keywords in index order.
  pub fn iter(&self) -> impl Iterator<Item = &DefaultAtom> + '_ {
    (0..self.len()).filter_map(move |id| self.keyword(id))
  }

  /// The symbolic identifier of every keyword, in index order, e.g. `R3_KEYW_MOV`.
  pub fn identifiers(&self, prefix: &str) -> Vec<String> {
    self.iter().map(|keyword| identifier(prefix, keyword)).collect()
  }

  pub fn to_table(&self, prefix: &str) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Index", ubl->"Keyword", ubl->"Identifier"]);

    for (id, keyword) in self.iter().enumerate() {
      table.add_row(row![r->id, format!("\"{}\"", keyword), identifier(prefix, keyword)]);
    }
    table
  }

}

pub fn identifier(prefix: &str, keyword: &str) -> String {
  format!("{}{}", prefix, keyword.to_ascii_uppercase())
}
