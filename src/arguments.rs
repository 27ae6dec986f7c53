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

//! The ordered set of positional argument definitions owned by a single
//! command, and the logic for binding tokens to those definitions.

use crate::argument::Argument;
use crate::error::*;
use crate::value::Value;
use log::debug;
use std::collections::HashMap;

/// Arguments is the ordered set of positional argument definitions owned
/// by a single command. The order in which definitions are registered is
/// the order in which tokens are bound to them at parse time.
///
/// Usage follows a strict two-phase protocol: first the command registers
/// each of its argument definitions (all structural invariants are
/// enforced here), and then - after named options have been stripped from
/// the command line by the surrounding framework - it calls `parse_args`
/// exactly once with the leftover positional tokens. Registering more
/// arguments after parsing is not supported.
#[derive(Debug)]
pub struct Arguments {
    /// The owning command's name, used only in diagnostic messages.
    name: String,
    args: Vec<Argument>,
    name_indexes: HashMap<String, usize>,
    validate_num: bool,
    has_array_arg: bool,
    has_optional_arg: bool,
}

impl Arguments {
    /// Constructs an empty Arguments set for the command with the given
    /// name.
    pub fn new(name: &str) -> Arguments {
        Arguments {
            name: name.to_owned(),
            args: Vec::new(),
            name_indexes: HashMap::new(),
            validate_num: false,
            has_array_arg: false,
            has_optional_arg: false,
        }
    }

    /// Sets the owning command's name, for diagnostics.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    /// Sets whether leftover input tokens - tokens beyond those consumed
    /// by the registered arguments - are a parse error.
    pub fn set_validate_num(&mut self, validate_num: bool) {
        self.validate_num = validate_num;
    }

    /// A convenience function which constructs an Argument with the given
    /// properties and registers it, as if by `add_argument`.
    pub fn add_arg(&mut self, name: &str, help: &str, required: bool, arrayed: bool) -> Result<usize> {
        self.add_argument(Argument::new(name, help, required, arrayed))
    }

    /// Registers the given argument definition, returning its assigned
    /// 0-based position.
    ///
    /// Registration enforces the container's structural invariants:
    ///
    /// - Argument names must be valid identifiers, and unique within the
    ///   command.
    /// - At most one arrayed argument may exist, and since it consumes all
    ///   remaining tokens, nothing may be registered after it.
    /// - A required argument cannot be registered after an optional one.
    ///
    /// Violations are configuration errors - programmer mistakes, not user
    /// input errors - and the caller's setup code should treat them as
    /// fatal rather than catching and retrying.
    pub fn add_argument(&mut self, mut arg: Argument) -> Result<usize> {
        arg.finalize()?;
        let name = arg.get_name().to_owned();

        if self.name_indexes.contains_key(&name) {
            return Err(Error::Configuration(format!(
                "the argument name '{}' already exists in command '{}'",
                name, self.name
            )));
        }
        if self.has_array_arg {
            return Err(Error::Configuration(format!(
                "command '{}' already has an arrayed argument, so argument '{}' cannot be added \
                 after it",
                self.name, name
            )));
        }
        if arg.is_required() && self.has_optional_arg {
            return Err(Error::Configuration(format!(
                "required argument '{}' cannot be defined after an optional argument",
                name
            )));
        }

        let index = self.args.len();
        arg.set_index(index);
        self.name_indexes.insert(name, index);

        if !arg.is_required() {
            self.has_optional_arg = true;
        }
        if arg.is_arrayed() {
            self.has_array_arg = true;
        }

        self.args.push(arg);
        Ok(index)
    }

    /// Binds the given positional tokens to the registered arguments, in
    /// registration order, in a single deterministic pass.
    ///
    /// When the input runs out before a required argument is reached, a
    /// missing-argument error is returned; when it runs out at an optional
    /// argument, the pass simply stops and all subsequent arguments are
    /// left unbound. An arrayed argument absorbs every remaining token. A
    /// validator rejection aborts the parse immediately, leaving values
    /// bound in earlier iterations intact. Finally, if strict counting was
    /// enabled via `set_validate_num`, any unconsumed trailing tokens are
    /// an error.
    pub fn parse_args(&mut self, args: &[String]) -> Result<()> {
        let in_num = args.len();
        let mut consumed = 0;

        for i in 0..self.args.len() {
            // Positions are 1-based in user-facing diagnostics.
            let position = i + 1;
            if position > in_num {
                let arg = &self.args[i];
                if arg.is_required() {
                    return Err(Error::MissingArgument {
                        name: arg.get_show_name().to_owned(),
                        position: position,
                    });
                }
                break;
            }

            let arg = &mut self.args[i];
            if arg.is_arrayed() {
                debug!(
                    "Binding {} trailing token(s) to arrayed argument '{}'",
                    in_num - i,
                    arg.get_name()
                );
                arg.bind_value(Value::Repeated(args[i..].to_vec()))?;
                consumed = in_num;
            } else {
                debug!("Binding token '{}' to argument '{}'", args[i], arg.get_name());
                arg.bind_value(Value::Single(args[i].clone()))?;
                consumed = position;
            }
        }

        if self.validate_num && in_num > consumed {
            return Err(Error::TooManyArguments(args[consumed..].to_vec()));
        }
        Ok(())
    }

    /// Returns all registered argument definitions, in position order.
    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    /// Returns whether an argument with the given name has been
    /// registered.
    pub fn has_arg(&self, name: &str) -> bool {
        self.name_indexes.contains_key(name)
    }

    /// Returns whether any arguments have been registered at all.
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }

    /// Looks up a registered argument by name. Asking for a name which was
    /// never registered is a programmer error, and fails with a lookup
    /// error.
    pub fn arg(&self, name: &str) -> Result<&Argument> {
        match self.name_indexes.get(name) {
            Some(&i) => Ok(&self.args[i]),
            None => Err(Error::Lookup(format!(
                "no argument '{}' in command '{}'",
                name, self.name
            ))),
        }
    }

    /// Looks up a registered argument by name, mutably, e.g. for the
    /// owning framework to re-bind its value.
    pub fn arg_mut(&mut self, name: &str) -> Result<&mut Argument> {
        match self.name_indexes.get(name) {
            Some(&i) => Ok(&mut self.args[i]),
            None => Err(Error::Lookup(format!(
                "no argument '{}' in command '{}'",
                name, self.name
            ))),
        }
    }

    /// Looks up a registered argument by its 0-based position.
    pub fn arg_by_index(&self, index: usize) -> Result<&Argument> {
        match self.args.get(index) {
            Some(arg) => Ok(arg),
            None => Err(Error::Lookup(format!(
                "no argument #{} in command '{}'",
                index, self.name
            ))),
        }
    }
}
