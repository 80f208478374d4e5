/*!
  Runs the whole derivation over an ISA definition:
  ```text
  instructions ─┬─> [`KeywordRegistry::build`] ──────────────────────> keywords
                └─> [`InstructionGroups::group`] ─┬─> [`LookupTable::build`] -> lookup table
                                                  └─> [`OperandListing::build`] -> listing
  ```
  Nothing is returned unless every stage succeeds.
*/

use std::fmt::{Display, Formatter};

use crate::error::IsaError;
use crate::group::InstructionGroups;
use crate::isa::IsaDefinition;
use crate::keyword::KeywordRegistry;
use crate::listing::OperandListing;
use crate::lut::LookupTable;

pub struct Artifacts {
  pub name           : String,
  pub keyword_prefix : String,
  pub keywords       : KeywordRegistry,
  pub table          : LookupTable,
  pub listing        : OperandListing,
}

pub fn generate(isa: &IsaDefinition) -> Result<Artifacts, IsaError> {
  let span = tracing::info_span!("generate", isa = %isa.name);
  let _guard = span.enter();

  let keywords = KeywordRegistry::build(&isa.instructions)?;
  let groups   = InstructionGroups::group(&isa.instructions)?;
  let table    = LookupTable::build(&groups)?;
  let listing  = OperandListing::build(&groups);

  tracing::info!(
    instructions = isa.instructions.len(),
    mnemonics = table.len(),
    keywords = keywords.len(),
    "generated tables"
  );

  Ok(Artifacts {
    name: isa.name.clone(),
    keyword_prefix: isa.keyword_prefix.clone(),
    keywords,
    table,
    listing
  })
}

impl Display for Artifacts {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "Keywords of {} ({}):", self.name, self.keywords.len())?;
    writeln!(f, "{}", self.keywords.to_table(&self.keyword_prefix))?;
    writeln!(f, "Addressing modes of {} ({} mnemonics):", self.name, self.table.len())?;
    writeln!(f, "{}", self.table)?;
    writeln!(f, "Operand syntax:")?;
    write!(f, "{}", self.listing)
  }
}
