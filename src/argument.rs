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

//! Definitions of individual positional arguments, along with the
//! validator and handler callbacks that can be attached to them.

use crate::error::*;
use crate::value::Value;
use std::fmt;

/// A Validator is called with the raw value being bound to an argument. It
/// may transform the value, or reject it by returning an error, in which
/// case the whole parse is aborted and the error is surfaced to the caller.
pub type Validator = Box<dyn Fn(Value) -> Result<Value>>;

/// A Handler transforms an argument's value. It is applied after the
/// Validator when a value is bound, and applied again to the stored value
/// on every read; handlers are therefore expected to be idempotent.
pub type Handler = Box<dyn Fn(Value) -> Value>;

/// Returns whether the given (already trimmed) string is acceptable as an
/// argument name: nonempty, containing only alphanumeric characters,
/// hyphens, and underscores.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// An Argument is a single positional parameter definition for a command,
/// along with the value bound to it at parse time. Unlike a named flag, it
/// is identified purely by its position in the command-line arguments.
///
/// An Argument is built and configured freely, then registered into an
/// `Arguments` container, which validates the definition and assigns its
/// position. From that point on the definition is frozen except for its
/// value slot, which is written during the parse pass and read afterwards.
pub struct Argument {
    name: String,
    help: String,
    show_name: String,
    required: bool,
    arrayed: bool,
    index: usize,
    value: Option<Value>,
    validator: Option<Validator>,
    handler: Option<Handler>,
}

impl Argument {
    /// Constructs a new Argument with the given properties and an empty
    /// value slot. The name is not validated here - validation is deferred
    /// until the definition is registered, so it can be built up
    /// incrementally first.
    pub fn new(name: &str, help: &str, required: bool, arrayed: bool) -> Argument {
        Argument {
            name: name.to_owned(),
            help: help.to_owned(),
            show_name: String::new(),
            required: required,
            arrayed: arrayed,
            index: 0,
            value: None,
            validator: None,
            handler: None,
        }
    }

    /// Constructs an Argument which must be supplied by the user, or
    /// parsing fails.
    pub fn required(name: &str, help: &str) -> Argument {
        Argument::new(name, help, true, false)
    }

    /// Constructs an Argument which may be omitted by the user, in which
    /// case its value slot is simply left unset (or left holding its
    /// default value, if one was configured).
    pub fn optional(name: &str, help: &str) -> Argument {
        Argument::new(name, help, false, false)
    }

    /// Sets a default value, which is visible through the value accessors
    /// until the parse pass overwrites it.
    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Overrides the name used for this argument in help output. By
    /// default the display name is the argument's name itself.
    pub fn with_show_name(mut self, show_name: &str) -> Self {
        self.show_name = show_name.to_owned();
        self
    }

    /// Sets a validator, which will be called with each raw value bound to
    /// this argument.
    pub fn with_validator<F: Fn(Value) -> Result<Value> + 'static>(mut self, validator: F) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Sets a handler, which transforms this argument's value both when it
    /// is bound and on every read.
    pub fn with_handler<F: Fn(Value) -> Value + 'static>(mut self, handler: F) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Marks this argument as arrayed, meaning it greedily scoops up *all*
    /// of the remaining tokens at the end of the input. Because of this, a
    /// command may have at most one arrayed argument, and it must be the
    /// last one registered.
    pub fn set_arrayed(mut self) -> Self {
        self.arrayed = true;
        self
    }

    /// Finalizes this definition's name: trims it, rejects names which are
    /// empty or fail the identifier check, and defaults the display name.
    /// Called by the container when the definition is registered.
    pub(crate) fn finalize(&mut self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::Configuration(
                "the argument name cannot be empty".to_owned(),
            ));
        }
        if !is_valid_name(name) {
            return Err(Error::Configuration(format!(
                "the argument name '{}' is invalid; names may contain only alphanumeric \
                 characters, '-' and '_'",
                name
            )));
        }

        self.name = name.to_owned();
        if self.show_name.is_empty() {
            self.show_name = self.name.clone();
        }
        Ok(())
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Binds a value to this argument: the validator (if any) may transform
    /// or reject the raw value, the handler (if any) transforms the result,
    /// and the final value is stored in the slot.
    pub fn bind_value(&mut self, value: Value) -> Result<()> {
        let mut value = value;
        if let Some(validator) = self.validator.as_ref() {
            value = validator(value).map_err(|e| Error::Validation {
                name: self.name.clone(),
                message: e.to_string(),
            })?;
        }
        if let Some(handler) = self.handler.as_ref() {
            value = handler(value);
        }
        self.value = Some(value);
        Ok(())
    }

    /// Returns the currently stored value with the handler (if any)
    /// applied to it. Note that the handler already ran once when the value
    /// was bound; it runs again on every read, so it must be idempotent
    /// for this accessor to be stable.
    pub fn value(&self) -> Option<Value> {
        let value = self.value.clone()?;
        Some(match self.handler.as_ref() {
            Some(handler) => handler(value),
            None => value,
        })
    }

    /// Returns the raw stored value as a list of strings, without invoking
    /// the handler. A Single value yields one element; an unset slot yields
    /// an empty vector. This interpretation is best-effort and not itself
    /// validated.
    pub fn array(&self) -> Vec<String> {
        match self.value.as_ref() {
            None => Vec::new(),
            Some(v) => v.repeated().into_iter().map(|s| s.to_owned()).collect(),
        }
    }

    /// Returns whether any value (including a configured default) occupies
    /// this argument's value slot.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns this argument's name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns this argument's display name. Before registration this may
    /// be empty, if no override was configured.
    pub fn get_show_name(&self) -> &str {
        self.show_name.as_str()
    }

    /// Returns true if parsing fails when this argument is absent from the
    /// input.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns true if this argument consumes all remaining input tokens
    /// as a sequence, rather than a single token.
    pub fn is_arrayed(&self) -> bool {
        self.arrayed
    }

    /// Returns this argument's 0-based position among its command's
    /// arguments, assigned once at registration.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the name to render for this argument in help output: the
    /// display name, with a "..." suffix if the argument is arrayed.
    pub fn help_name(&self) -> String {
        if self.arrayed {
            format!("{}...", self.show_name)
        } else {
            self.show_name.clone()
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("show_name", &self.show_name)
            .field("required", &self.required)
            .field("arrayed", &self.arrayed)
            .field("index", &self.index)
            .field("value", &self.value)
            .finish()
    }
}
