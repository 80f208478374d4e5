/*!
  Splits instruction syntax patterns into word tokens. A token is a run of `[A-Za-z0-9_]`;
  everything else, including the operand placeholder punctuation `% [ ] ( ) ,`, only separates
  tokens. Tokens are lowercased and interned.

  ```text
  "MOV A, X(%)Y"  ->  ["mov", "a", "x", "y"]
  ```
*/

use nom::{
  bytes::complete::{take_while, take_while1},
  character::complete::multispace0,
  multi::many0,
  sequence::preceded,
  IResult
};
use string_cache::DefaultAtom;

use crate::error::IsaError;

fn is_word_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

/**
  <word> ::= [A-Za-z0-9_]+
*/
fn pword(text: &str) -> IResult<&str, &str> {
  take_while1(is_word_char)(text)
}

/// Anything that can't be part of a word.
fn pseparator(text: &str) -> IResult<&str, &str> {
  take_while(|c: char| !is_word_char(c))(text)
}

fn pwords(text: &str) -> IResult<&str, Vec<&str>> {
  many0(preceded(pseparator, pword))(text)
}

/**
  <root> ::= <whitespace>* <word>
*/
fn proot(text: &str) -> IResult<&str, &str> {
  preceded(multispace0, pword)(text)
}

pub fn intern_keyword(word: &str) -> DefaultAtom {
  DefaultAtom::from(word.to_ascii_lowercase())
}

/// The lowercased word tokens of `syntax`, in order. Never fails.
pub fn tokenize(syntax: &str) -> Vec<DefaultAtom> {
  match pwords(syntax) {
    Ok((_rest, words)) => words.into_iter().map(intern_keyword).collect(),
    // `many0` only fails on a parser that doesn't consume, which `pword` never does.
    Err(_) => Vec::new()
  }
}

/**
  Splits `syntax` into its root mnemonic and the operand text that follows it. The operand text
  is trimmed, so it is empty for instructions without operands.

  ```text
  "MOV A, [%]"  ->  ("mov", "A, [%]")
  "RET"         ->  ("ret", "")
  ```
*/
pub fn split_mnemonic(syntax: &str) -> Result<(DefaultAtom, &str), IsaError> {
  match proot(syntax) {
    Ok((rest, root)) => Ok((intern_keyword(root), rest.trim())),
    Err(_) => Err(IsaError::MalformedSyntax { syntax: syntax.to_string() })
  }
}

pub fn root_mnemonic(syntax: &str) -> Result<DefaultAtom, IsaError> {
  split_mnemonic(syntax).map(|(root, _operands)| root)
}
