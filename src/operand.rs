//! Operand coercion: how an arbitrary right-hand side becomes something a
//! vector operation can work with.
//!
//! Any binary operation first funnels its right-hand side through [`Operand`]
//! and resolves it. Raw coordinate sequences become vectors, anything with
//! the [`ToVector`] capability contributes its base-form vector, scalars pass
//! through for broadcasting (unless strict resolution forbids them), and
//! textual or mapping-shaped inputs are rejected outright.

use std::collections::HashMap;

use crate::error::{Result, VectorError};
use crate::vector::Vector;

/// Capability of producing a base-form [`Vector`] view of oneself.
///
/// This is the hook the coercion protocol probes for: implement it on any
/// type that should be usable as the right-hand side of vector arithmetic
/// and comparisons. [`Vector`] implements it as a plain clone; `Point` as a
/// view that drops the 2-axis wrapper.
pub trait ToVector {
    fn to_vector(&self) -> Vector;
}

/// A not-yet-resolved right-hand operand.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A raw coordinate sequence; resolution constructs a vector from it.
    Coords(Vec<f64>),
    /// A bare number; broadcasts elementwise under lenient resolution.
    Scalar(f64),
    /// Already base-form.
    Vector(Vector),
    /// Textual or mapping-shaped input. Never a valid operand; the tag names
    /// the offending kind in the error.
    Unsupported(&'static str),
}

/// A resolved operand: either vector-shaped or a broadcastable scalar.
#[derive(Debug, Clone)]
pub enum Coerced {
    Vector(Vector),
    Scalar(f64),
}

impl Operand {
    /// Builds an operand from anything carrying the [`ToVector`] capability.
    ///
    /// The `From` impls below cover the types this crate knows about;
    /// downstream vector-like types go through here.
    pub fn of(item: &impl ToVector) -> Operand {
        Operand::Vector(item.to_vector())
    }

    /// Lenient resolution: sequences and vector-likes become vectors,
    /// scalars pass through unchanged for the caller to broadcast.
    pub fn resolve(self) -> Result<Coerced> {
        match self {
            Operand::Coords(coords) => Ok(Coerced::Vector(Vector::new(coords))),
            Operand::Vector(vector) => Ok(Coerced::Vector(vector)),
            Operand::Scalar(value) => Ok(Coerced::Scalar(value)),
            Operand::Unsupported(kind) => Err(VectorError::UnsupportedOperand { kind }),
        }
    }

    /// Strict resolution: as [`resolve`](Operand::resolve), but a scalar is
    /// refused instead of passed through.
    pub fn resolve_strict(self) -> Result<Vector> {
        match self {
            Operand::Scalar(_) => Err(VectorError::UnsupportedOperand { kind: "scalar" }),
            other => other.resolve()?.into_vector("vector"),
        }
    }
}

impl Coerced {
    /// Post-coercion type check: fails unless the operand resolved to a
    /// vector. `expected` names the receiver's type for the error message.
    pub fn into_vector(self, expected: &'static str) -> Result<Vector> {
        match self {
            Coerced::Vector(vector) => Ok(vector),
            Coerced::Scalar(_) => Err(VectorError::TypeMismatch { expected }),
        }
    }
}

impl From<Vec<f64>> for Operand {
    fn from(coords: Vec<f64>) -> Operand {
        Operand::Coords(coords)
    }
}

impl From<&[f64]> for Operand {
    fn from(coords: &[f64]) -> Operand {
        Operand::Coords(coords.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Operand {
    fn from(coords: [f64; N]) -> Operand {
        Operand::Coords(coords.to_vec())
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Operand {
        Operand::Coords(vec![x, y])
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from((x, y, z): (f64, f64, f64)) -> Operand {
        Operand::Coords(vec![x, y, z])
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Operand {
        Operand::Scalar(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Operand {
        Operand::Scalar(value as f64)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Operand {
        Operand::Scalar(value as f64)
    }
}

impl From<Vector> for Operand {
    fn from(vector: Vector) -> Operand {
        Operand::Vector(vector)
    }
}

impl From<&Vector> for Operand {
    fn from(vector: &Vector) -> Operand {
        Operand::Vector(vector.clone())
    }
}

impl From<&str> for Operand {
    fn from(_: &str) -> Operand {
        Operand::Unsupported("str")
    }
}

impl From<String> for Operand {
    fn from(_: String) -> Operand {
        Operand::Unsupported("str")
    }
}

impl From<HashMap<String, f64>> for Operand {
    fn from(_: HashMap<String, f64>) -> Operand {
        Operand::Unsupported("map")
    }
}
