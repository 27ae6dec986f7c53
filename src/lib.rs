// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! arggy is a library for defining and binding the positional arguments of
//! a command-line command. A command declares an ordered list of named
//! positional arguments (required or optional, single-valued or arrayed),
//! the declaration is validated as it is built, and a single parse pass
//! binds already-tokenized input to the declared arguments.
//!
//! Tokenizing the command line, parsing named flags, rendering help text,
//! and dispatching between commands are all left to the surrounding
//! framework; this library only consumes the leftover positional tokens.

pub mod argument;
pub mod arguments;
pub mod error;
pub mod value;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with
// just one "use".

pub use crate::argument::{Argument, Handler, Validator};
pub use crate::arguments::Arguments;
pub use crate::error::{Error, Result};
pub use crate::value::Value;
