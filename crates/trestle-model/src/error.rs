// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// The error type for entity construction.
///
/// Both variants carry the rejected value pre-formatted as a string so the
/// error type stays independent of the numeric parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A hiker was given a speed that is not strictly positive and finite.
    InvalidSpeed {
        /// The name of the offending hiker.
        name: String,
        /// The rejected speed value.
        value: String,
    },
    /// A bridge was given a length that is not strictly positive and finite.
    InvalidLength {
        /// The rejected length value.
        value: String,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSpeed { name, value } => {
                write!(f, "Hiker '{}' speed must be > 0, got {}", name, value)
            }
            Self::InvalidLength { value } => {
                write!(f, "Bridge length must be > 0, got {}", value)
            }
        }
    }
}

impl std::error::Error for ModelError {}
