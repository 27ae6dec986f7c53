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

//! The value types which can be bound to positional arguments.

use std::str::FromStr;

/// A Value is the value bound to a positional argument. The shape of the
/// value depends on the kind of argument it is associated with: a plain
/// argument consumes exactly one token, while an arrayed argument consumes
/// every token remaining in the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A single string value (perhaps a string which the user of this
    /// library can then further interpret / parse as some other type).
    Single(String),
    /// An arrayed argument's values. These should be treated the same as
    /// one would a Single string value, except there are potentially zero
    /// or more of them.
    Repeated(Vec<String>),
}

impl Value {
    /// Return this value as a single string, if it has that shape. A
    /// Repeated value yields None, even if it happens to contain exactly
    /// one element.
    pub fn single(&self) -> Option<&str> {
        match self {
            Value::Single(v) => Some(v.as_str()),
            Value::Repeated(_) => None,
        }
    }

    /// Return this value's contents as a list of strings. The returned
    /// vector contains exactly one entry for a Single value, and zero or
    /// more entries for a Repeated value.
    pub fn repeated(&self) -> Vec<&str> {
        match self {
            Value::Single(v) => vec![v.as_str()],
            Value::Repeated(vs) => vs.iter().map(|v| v.as_str()).collect(),
        }
    }

    /// Return this value's contents, parsed into the given type. This is a
    /// convenience wrapper around `repeated`; type interpretation is
    /// best-effort, and any parse failure is the caller's to handle.
    pub fn parse_as<E, T: FromStr<Err = E>>(&self) -> std::result::Result<Vec<T>, E> {
        self.repeated().iter().map(|v| v.parse::<T>()).collect()
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Single(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Single(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(vs: Vec<String>) -> Self {
        Value::Repeated(vs)
    }
}
