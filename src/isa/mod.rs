/*!
  The declarative description of an instruction set. Each instruction is a syntax pattern such
  as `MOV A, [%]`, the opcode byte as hex text, and the bit widths of the values encoded after
  the opcode. The placeholder `%` stands for whatever value the programmer writes.

  Definitions are read from JSON of the form
  ```text
  {
    "name": "gr8cpu-r3",
    "keyword_prefix": "R3_KEYW_",
    "instructions": [
      {"name": "PSH %", "hex": "07", "args": [{"type": {"bits": 8}}]},
      ...
    ]
  }
  ```
  Only `instructions` is required.
*/

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::IsaError;

const GR8CPU_R3: &str = include_str!("gr8cpu-r3.json");

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
pub struct ArgType {
  pub bits: u32
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize)]
pub struct ArgDef {
  #[serde(rename = "type")]
  pub kind: ArgType
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
pub struct InstructionDef {
  /// The syntax pattern, root mnemonic first.
  pub name : String,
  pub hex  : String,
  #[serde(default)]
  pub args : Vec<ArgDef>,
}

impl InstructionDef {

  #[cfg(test)]
  pub fn new(name: &str, hex: &str, bits: &[u32]) -> InstructionDef {
    InstructionDef {
      name: name.to_string(),
      hex: hex.to_string(),
      args: bits.iter().map(|&bits| ArgDef{ kind: ArgType{ bits } }).collect()
    }
  }

  pub fn opcode(&self) -> Result<u8, IsaError> {
    u8::from_str_radix(self.hex.trim(), 16).map_err(
      |_| IsaError::InvalidOpcode {
        syntax: self.name.clone(),
        hex: self.hex.clone()
      }
    )
  }

}

fn default_name() -> String {
  "isa".to_string()
}

fn default_keyword_prefix() -> String {
  "KEYW_".to_string()
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct IsaDefinition {
  #[serde(default = "default_name")]
  pub name           : String,
  /// Prepended to the uppercased keyword to form its symbolic identifier.
  #[serde(default = "default_keyword_prefix")]
  pub keyword_prefix : String,
  pub instructions   : Vec<InstructionDef>,
}

impl IsaDefinition {

  pub fn from_json(text: &str) -> Result<IsaDefinition, IsaError> {
    Ok(serde_json::from_str(text)?)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> Result<IsaDefinition, IsaError> {
    let text = fs::read_to_string(path)?;
    IsaDefinition::from_json(&text)
  }

  /// The GR8CPU revision 3 instruction set, compiled into the binary.
  pub fn gr8cpu_r3() -> Result<IsaDefinition, IsaError> {
    IsaDefinition::from_json(GR8CPU_R3)
  }

}
