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

//! Error and Result types for defining and binding positional arguments.

use thiserror::Error;

/// Error represents the various errors which can come up while defining or
/// binding positional command-line arguments.
///
/// Configuration and Lookup errors indicate programmer mistakes - callers
/// should treat them as fatal during command construction, rather than
/// catching and retrying. The remaining variants are driven by end-user
/// input, and are meant to be surfaced by whatever prints the command's
/// usage message.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument definition violated a registration-time invariant (an
    /// invalid or duplicate name, a second arrayed argument, or a required
    /// argument after an optional one).
    #[error("Invalid argument definition: {0}")]
    Configuration(String),
    /// A query for an argument which was never registered.
    #[error("Unknown argument: {0}")]
    Lookup(String),
    /// A required argument was not present in the input. The position is
    /// 1-based, matching how a user counts arguments on the command line.
    #[error("Must set value for the argument '{name}' (position #{position})")]
    MissingArgument {
        /// The argument's display name.
        name: String,
        /// The argument's 1-based position.
        position: usize,
    },
    /// Strict argument counting was enabled, and input tokens were left
    /// over after every registered argument had been bound.
    #[error("Entered too many arguments: {0:?}")]
    TooManyArguments(Vec<String>),
    /// An argument's validator rejected the value being bound to it.
    #[error("Invalid value for argument '{name}': {message}")]
    Validation {
        /// The name of the argument whose validator rejected the value.
        name: String,
        /// The underlying validator error, rendered as a message.
        message: String,
    },
}

/// A Result type which uses arggy's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
