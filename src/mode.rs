/*!
  Addressing modes and the resolution of instruction syntax into opcode, operand modes and
  instruction length.

  An operand is written in one of a small, closed set of surface forms, `%` standing for the
  value written by the programmer:

  | Surface | Mode    | Surface | Mode    |
  |---------|---------|---------|---------|
  | `A`     | REG_A   | `%`     | IMM     |
  | `X`     | REG_X   | `[%]`   | MEM     |
  | `Y`     | REG_Y   | `X[%]`  | MEM_X   |
  | `F`     | REG_F   | `Y[%]`  | MEM_Y   |
  | `STL`   | REG_STL | `(%)`   | PTR     |
  | `STH`   | REG_STH | `X(%)`  | PTR_X   |
  |         |         | `(%)Y`  | PTR_Y   |
  |         |         | `X(%)Y` | PTR_XY  |

  Surface forms are matched verbatim. Anything else is an error, never a fallback.
*/

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::error::IsaError;
use crate::isa::InstructionDef;
use crate::token::split_mnemonic;

/**
  The discriminant of each mode is the byte the assembler uses for it. Memory modes are `0x1_`
  and pointer modes `0x2_`, with bit 1 marking X indexing and bit 2 marking Y indexing. The
  general purpose registers reuse those bits on their own; special registers are `0xF_`.
*/
#[derive(
  StrumDisplay, EnumIter, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,     Eq, PartialEq,     Debug,        Hash
)]
#[repr(u8)]
pub enum AddressingMode {
  #[strum(to_string = "IMM")]
  Immediate       = 0x00,

  #[strum(to_string = "REG_A")]
  RegisterA       = 0x01,
  #[strum(to_string = "REG_X")]
  RegisterX       = 0x02,
  #[strum(to_string = "REG_Y")]
  RegisterY       = 0x04,

  #[strum(to_string = "MEM")]
  Memory          = 0x10,
  #[strum(to_string = "MEM_X")]
  MemoryX         = 0x12,
  #[strum(to_string = "MEM_Y")]
  MemoryY         = 0x14,

  #[strum(to_string = "PTR")]
  Pointer         = 0x20,
  #[strum(to_string = "PTR_X")]
  PointerX        = 0x22,
  #[strum(to_string = "PTR_Y")]
  PointerY        = 0x24,
  #[strum(to_string = "PTR_XY")]
  PointerXY       = 0x26,

  #[strum(to_string = "REG_F")]
  RegisterF       = 0xF1,
  #[strum(to_string = "REG_STL")]
  RegisterStl     = 0xF2,
  #[strum(to_string = "REG_STH")]
  RegisterSth     = 0xF3,
}

lazy_static! {
  /// Built from the enum itself, so every mode has exactly one surface form.
  static ref SURFACE_FORMS: HashMap<&'static str, AddressingMode> = {
    let mut forms = HashMap::new();
    for mode in AddressingMode::iter() {
      let previous = forms.insert(mode.surface(), mode);
      debug_assert!(previous.is_none(), "surface form `{}` used by two modes", mode.surface());
    }
    forms
  };
}

impl AddressingMode {

  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// How the operand is written in an instruction's syntax pattern.
  pub fn surface(&self) -> &'static str {
    match self {
      AddressingMode::Immediate   => "%",
      AddressingMode::RegisterA   => "A",
      AddressingMode::RegisterX   => "X",
      AddressingMode::RegisterY   => "Y",
      AddressingMode::Memory      => "[%]",
      AddressingMode::MemoryX     => "X[%]",
      AddressingMode::MemoryY     => "Y[%]",
      AddressingMode::Pointer     => "(%)",
      AddressingMode::PointerX    => "X(%)",
      AddressingMode::PointerY    => "(%)Y",
      AddressingMode::PointerXY   => "X(%)Y",
      AddressingMode::RegisterF   => "F",
      AddressingMode::RegisterStl => "STL",
      AddressingMode::RegisterSth => "STH",
    }
  }

  pub fn from_surface(surface: &str) -> Option<AddressingMode> {
    SURFACE_FORMS.get(surface).copied()
  }

}

/// One syntactic variant of an instruction, as the assembler needs to know it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedVariant {
  pub opcode        : u8,
  pub operand_count : usize,
  /// Bytes following the opcode.
  pub word_count    : u32,
  pub modes         : Vec<AddressingMode>,
}

impl Display for ResolvedVariant {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "0x{:02X} args={} words={} [{}]",
      self.opcode,
      self.operand_count,
      self.word_count,
      self.modes.iter().map(AddressingMode::to_string).collect::<Vec<String>>().join(", ")
    )
  }
}

/**
  Resolves one instruction definition.

  ```text
  "RET"        ->  0 operands, no modes,        0 words
  "PSH %"      ->  1 operand,  [IMM],           bits / 8 words
  "MOV A, [%]" ->  2 operands, [REG_A, MEM],    0 words
  ```
*/
pub fn resolve(def: &InstructionDef) -> Result<ResolvedVariant, IsaError> {
  let (mnemonic, operand_text) = split_mnemonic(&def.name)?;
  let opcode = def.opcode()?;

  let surfaces: Vec<&str> =
    match operand_text.is_empty() {
      true  => Vec::new(),
      false => operand_text.split(',').map(str::trim).collect()
    };

  if surfaces.len() > 2 || def.args.len() > 2 {
    return Err(IsaError::UnsupportedArity {
      mnemonic,
      syntax: def.name.clone(),
      operands: surfaces.len(),
      args: def.args.len()
    });
  }

  let modes = surfaces
    .iter()
    .map(
      |&surface| AddressingMode::from_surface(surface).ok_or_else(
        || IsaError::UnrecognizedMode {
          mnemonic: mnemonic.clone(),
          syntax: def.name.clone(),
          operand: surface.to_string()
        }
      )
    )
    .collect::<Result<Vec<AddressingMode>, IsaError>>()?;

  let word_count =
    match modes.len() {
      1 => {
        match def.args.as_slice() {
          [arg] if arg.kind.bits % 8 == 0 => arg.kind.bits / 8,
          [arg] => {
            return Err(IsaError::UnalignedOperandWidth {
              mnemonic,
              syntax: def.name.clone(),
              bits: arg.kind.bits
            });
          }
          // Register operands have no encoded value. Two declared values cannot be sized as
          // one operand either.
          _ => 0
        }
      }
      // ISA specific: two operand forms of this instruction set encode their operand outside
      // the immediate length mechanism and are never sized from the declared bit width.
      _ => 0
    };

  let variant = ResolvedVariant {
    opcode,
    operand_count: modes.len(),
    word_count,
    modes
  };

  #[cfg(feature = "trace_pipeline")]
  tracing::trace!(mnemonic = %mnemonic, syntax = %def.name, variant = %variant, "resolved");

  Ok(variant)
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::convert::TryFrom;
  use pretty_assertions::assert_eq;

  use super::AddressingMode::*;

  fn variant(opcode: u8, word_count: u32, modes: Vec<AddressingMode>) -> ResolvedVariant {
    ResolvedVariant{ opcode, operand_count: modes.len(), word_count, modes }
  }

  #[test]
  fn every_surface_form_resolves_to_its_mode() {
    let expected = [
      ("A", RegisterA), ("X", RegisterX), ("Y", RegisterY), ("F", RegisterF),
      ("STL", RegisterStl), ("STH", RegisterSth), ("%", Immediate), ("[%]", Memory),
      ("X[%]", MemoryX), ("Y[%]", MemoryY), ("(%)", Pointer), ("X(%)", PointerX),
      ("(%)Y", PointerY), ("X(%)Y", PointerXY),
    ];
    for &(surface, mode) in expected.iter() {
      assert_eq!(AddressingMode::from_surface(surface), Some(mode), "`{}`", surface);
    }
    assert_eq!(AddressingMode::iter().count(), expected.len());
  }

  #[test]
  fn surface_forms_are_exact() {
    for surface in &["a", "Z[%]", "[ % ]", "X [%]", "IMM", "", "(%)X", "Y(%)"] {
      assert_eq!(AddressingMode::from_surface(surface), None, "`{}`", surface);
    }
  }

  #[test]
  fn tags_and_codes() {
    assert_eq!(Immediate.to_string(), "IMM");
    assert_eq!(PointerXY.to_string(), "PTR_XY");
    assert_eq!(RegisterStl.to_string(), "REG_STL");
    assert_eq!(MemoryX.code(), 0x12);
    assert_eq!(RegisterSth.code(), 0xF3);
    assert_eq!(AddressingMode::try_from(0x24u8).unwrap(), PointerY);
    assert!(AddressingMode::try_from(0x03u8).is_err());
  }

  #[test]
  fn no_operands() {
    let resolved = resolve(&InstructionDef::new("NOP", "00", &[])).unwrap();
    assert_eq!(resolved, variant(0x00, 0, vec![]));
  }

  #[test]
  fn one_sized_operand() {
    let resolved = resolve(&InstructionDef::new("PSH %", "07", &[8])).unwrap();
    assert_eq!(resolved, variant(0x07, 1, vec![Immediate]));

    let resolved = resolve(&InstructionDef::new("JMP (%)", "6D", &[16])).unwrap();
    assert_eq!(resolved, variant(0x6D, 2, vec![Pointer]));

    let resolved = resolve(&InstructionDef::new("JMPT X[%]", "75", &[16])).unwrap();
    assert_eq!(resolved, variant(0x75, 2, vec![MemoryX]));
  }

  #[test]
  fn one_register_operand() {
    let resolved = resolve(&InstructionDef::new("INC Y", "6A", &[])).unwrap();
    assert_eq!(resolved, variant(0x6A, 0, vec![RegisterY]));
  }

  #[test]
  fn one_operand_with_two_values_not_sized() {
    let resolved = resolve(&InstructionDef::new("JMP %", "0E", &[16, 8])).unwrap();
    assert_eq!(resolved, variant(0x0E, 0, vec![Immediate]));

    // Width is not checked when there is nothing to size.
    let resolved = resolve(&InstructionDef::new("JMP (%)", "6D", &[12, 8])).unwrap();
    assert_eq!(resolved, variant(0x6D, 0, vec![Pointer]));
  }

  #[test]
  fn two_operands_never_sized() {
    let resolved = resolve(&InstructionDef::new("LD A, %", "10", &[8])).unwrap();
    assert_eq!(resolved, variant(0x10, 0, vec![RegisterA, Immediate]));

    let resolved = resolve(&InstructionDef::new("MOV X(%)Y, A", "2F", &[16])).unwrap();
    assert_eq!(resolved, variant(0x2F, 0, vec![PointerXY, RegisterA]));

    let resolved = resolve(&InstructionDef::new("MOV A,STL", "6E", &[])).unwrap();
    assert_eq!(resolved, variant(0x6E, 0, vec![RegisterA, RegisterStl]));
  }

  #[test]
  fn unknown_register_prefix() {
    let result = resolve(&InstructionDef::new("LD A, Z[%]", "11", &[16]));
    match result {
      Err(IsaError::UnrecognizedMode { mnemonic, syntax, operand }) => {
        assert_eq!(&*mnemonic, "ld");
        assert_eq!(syntax, "LD A, Z[%]");
        assert_eq!(operand, "Z[%]");
      }
      other => panic!("expected an unrecognized mode, got {:?}", other)
    }
  }

  #[test]
  fn dangling_comma_is_unrecognized() {
    let result = resolve(&InstructionDef::new("MOV A,", "17", &[]));
    assert!(matches!(result, Err(IsaError::UnrecognizedMode { ref operand, .. }) if operand.is_empty()));
  }

  #[test]
  fn three_operands_rejected() {
    let result = resolve(&InstructionDef::new("ADD A, X, Y", "32", &[]));
    assert!(matches!(result, Err(IsaError::UnsupportedArity { operands: 3, args: 0, .. })));
  }

  #[test]
  fn three_args_rejected() {
    let result = resolve(&InstructionDef::new("ADD A, %", "38", &[8, 8, 8]));
    assert!(matches!(result, Err(IsaError::UnsupportedArity { operands: 2, args: 3, .. })));
  }

  #[test]
  fn unaligned_width() {
    let result = resolve(&InstructionDef::new("VST %", "7E", &[12]));
    assert!(matches!(result, Err(IsaError::UnalignedOperandWidth { bits: 12, .. })));
  }

  #[test]
  fn bad_opcode() {
    let result = resolve(&InstructionDef::new("NOP", "zz", &[]));
    assert!(matches!(result, Err(IsaError::InvalidOpcode { .. })));
  }

  #[test]
  fn display() {
    let resolved = resolve(&InstructionDef::new("MOV A, [%]", "20", &[16])).unwrap();
    assert_eq!(resolved.to_string(), "0x20 args=2 words=0 [REG_A, MEM]");
  }

}
