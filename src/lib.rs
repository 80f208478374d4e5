/*!
  Derives the assembler tables of an instruction set from its declarative definition: the
  keyword table used to tokenize assembly source, and the per mnemonic table of addressing mode
  variants used to select an opcode.

  The pipeline is this:
  ```text
  ISA definition -> [`token`] -> [`keyword`] registry
                 -> [`group`] -> [`mode`] resolution -> [`lut`] lookup table
                                                     -> [`listing`]
  ```
  [`pipeline::generate`] runs all of it.
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod error;
pub mod format;
pub mod group;
pub mod isa;
pub mod keyword;
pub mod listing;
pub mod lut;
pub mod mode;
pub mod pipeline;
pub mod token;

pub use error::IsaError;
pub use isa::{InstructionDef, IsaDefinition};
pub use pipeline::{generate, Artifacts};
