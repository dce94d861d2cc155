//! The general fixed-length vector and the shared operation set.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut, Range};
use std::slice::SliceIndex;

use crate::error::{Result, VectorError};
use crate::operand::{Operand, ToVector};

/// An ordered sequence of `f64` coordinates with a fixed length and an
/// optional cosmetic label.
///
/// The dimensionality `d` is whatever the constructor received and never
/// changes for the life of the value: indexed writes may replace individual
/// coordinate values, but nothing can add or remove a coordinate. Every
/// arithmetic and unary operation produces a fresh value.
///
/// Values are not internally synchronized. They are safe to share across
/// threads as long as they are treated as immutable; callers must serialize
/// any [`set`](Vector::set) / `IndexMut` mutation of a shared instance.
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Vec<f64>,
    name: Option<String>,
}

/// The elementwise binary operations a vector supports.
#[derive(Copy, Clone)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
}

impl BinOp {
    fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            BinOp::Add => Ok(a + b),
            BinOp::Sub => Ok(a - b),
            BinOp::Mul => Ok(a * b),
            BinOp::Div => {
                if b == 0.0 {
                    Err(VectorError::Arithmetic("division by zero"))
                } else {
                    Ok(a / b)
                }
            }
            BinOp::FloorDiv => {
                if b == 0.0 {
                    Err(VectorError::Arithmetic("division by zero"))
                } else {
                    Ok((a / b).floor())
                }
            }
            BinOp::Rem => {
                if b == 0.0 {
                    Err(VectorError::Arithmetic("remainder by zero"))
                } else {
                    // floored modulo, so the result takes the divisor's sign
                    // and b * floor_div(a, b) + rem(a, b) == a
                    Ok(a - b * (a / b).floor())
                }
            }
            BinOp::Pow => Ok(a.powf(b)),
        }
    }
}

impl Vector {
    /// Builds a vector from any coordinate buffer (`Vec<f64>`, slice, array).
    pub fn new(coordinates: impl Into<Vec<f64>>) -> Vector {
        Vector {
            coordinates: coordinates.into(),
            name: None,
        }
    }

    /// The zero vector of dimensionality `d`.
    pub fn zeros(d: usize) -> Vector {
        Vector::new(vec![0.0; d])
    }

    /// Attaches a label; it only ever shows up in the `Display` output.
    pub fn with_name(mut self, name: impl Into<String>) -> Vector {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Dimensionality; immutable after construction.
    pub fn d(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinate buffer as a stable indexable slice. Rendering sinks
    /// that only need the raw coordinates consume this.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Checked read of a single coordinate.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    /// Checked write of a single coordinate. The value changes; the
    /// dimensionality cannot.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.d();
        match self.coordinates.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::OutOfBounds { index, len }),
        }
    }

    /// Writes a contiguous run of coordinates. The replacement must match
    /// the addressed length exactly.
    pub fn set_slice(&mut self, range: Range<usize>, values: &[f64]) -> Result<()> {
        let len = self.d();
        if range.end > len {
            return Err(VectorError::OutOfBounds {
                index: range.end,
                len,
            });
        }
        if range.len() != values.len() {
            return Err(VectorError::DimensionMismatch {
                expected: range.len(),
                actual: values.len(),
            });
        }
        self.coordinates[range].copy_from_slice(values);
        Ok(())
    }

    /// Removing a coordinate would change the dimensionality, which is fixed
    /// for the life of the value. Always fails. Build a new vector from a
    /// slice of this one instead.
    pub fn remove(&mut self, _index: usize) -> Result<f64> {
        Err(VectorError::UnsupportedOperation(
            "cannot remove a coordinate; dimensionality is fixed",
        ))
    }

    /// Compares magnitudes (distance from each vector's own zero origin)
    /// with a total order over the underlying floats.
    pub fn magnitude_cmp(&self, other: &Vector) -> Ordering {
        self.distance().total_cmp(&other.distance())
    }

    fn l2_sqr_to(&self, other: &[f64]) -> f64 {
        self.coordinates
            .iter()
            .zip(other.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum::<f64>()
    }

    fn elementwise(&self, rhs: Operand, op: BinOp) -> Result<Vec<f64>> {
        match rhs.resolve()? {
            crate::operand::Coerced::Vector(other) => {
                if other.d() != self.d() {
                    return Err(VectorError::DimensionMismatch {
                        expected: self.d(),
                        actual: other.d(),
                    });
                }
                self.coordinates
                    .iter()
                    .zip(other.coordinates.iter())
                    .map(|(a, b)| op.apply(*a, *b))
                    .collect()
            }
            crate::operand::Coerced::Scalar(value) => self
                .coordinates
                .iter()
                .map(|a| op.apply(*a, value))
                .collect(),
        }
    }
}

impl ToVector for Vector {
    fn to_vector(&self) -> Vector {
        self.clone()
    }
}

/// Exact coordinate-wise equality, no tolerance. The label is cosmetic and
/// does not participate. Vectors of different dimensionality are unequal.
impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.coordinates == other.coordinates
    }
}

/// Ordering by magnitude, not coordinate-wise: `a < b` means `a` is closer
/// to its own zero origin than `b` is to its own.
///
/// This deliberately diverges from `==`: two vectors of equal magnitude but
/// different direction satisfy `a <= b` and `a >= b` while `a == b` is
/// false. Intended behavior, not a bug.
impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Vector) -> Option<Ordering> {
        Some(self.magnitude_cmp(other))
    }
}

/// `Vector<"name">(1, 2.5)`; the name segment is omitted when absent.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_vector(f, Vector::KIND_NAME, self.name.as_deref(), &self.coordinates)
    }
}

pub(crate) fn fmt_vector(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    name: Option<&str>,
    coordinates: &[f64],
) -> fmt::Result {
    write!(f, "{kind}")?;
    if let Some(name) = name {
        write!(f, "<\"{name}\">")?;
    }
    write!(f, "(")?;
    for (idx, coordinate) in coordinates.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{coordinate}")?;
    }
    write!(f, ")")
}

/// Reads and writes at any index or slice shape (`usize`, `a..b`, `a..`,
/// `..b`, `..`). Writes can replace coordinate values but never the count:
/// a slice write yields a `&mut [f64]` of fixed length.
impl<I: SliceIndex<[f64]>> Index<I> for Vector {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.coordinates[index]
    }
}

impl<I: SliceIndex<[f64]>> IndexMut<I> for Vector {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.coordinates[index]
    }
}

/// The operation set every vector-shaped type carries.
///
/// Arithmetic and comparisons are implemented once here against two factory
/// hooks: [`as_vector`](VectorOps::as_vector) exposes the coordinate
/// storage, and [`rewrap`](VectorOps::rewrap) rebuilds a value of the
/// implementor's own type from a result. That keeps operation results typed
/// as the receiver: adding a tuple to a `Point` yields a `Point`, not a bare
/// [`Vector`].
///
/// Every binary operation takes anything convertible to an [`Operand`] and
/// runs it through the coercion protocol before touching the coordinates.
pub trait VectorOps: ToVector + Sized {
    /// Static type descriptor, rendered into type-check error messages.
    const KIND_NAME: &'static str;

    /// The underlying coordinate storage.
    fn as_vector(&self) -> &Vector;

    /// Rebuilds a value of the implementor's type around an operation
    /// result. Elementwise operations preserve dimensionality, so the
    /// result always satisfies the implementor's length invariant.
    fn rewrap(&self, vector: Vector) -> Self;

    /// Unary `+`: an identity copy as a fresh, unlabeled value.
    fn pos(&self) -> Self {
        map_coords(self, |c| c)
    }

    /// Unary `-`: every coordinate negated.
    fn neg(&self) -> Self {
        map_coords(self, |c| -c)
    }

    /// Every coordinate replaced by its absolute value.
    fn abs(&self) -> Self {
        map_coords(self, f64::abs)
    }

    /// Bitwise complement. `f64` coordinates do not define one, so this
    /// always fails; it exists so callers get the defined error instead of
    /// a missing method.
    fn invert(&self) -> Result<Self> {
        Err(VectorError::UnsupportedOperation(
            "bitwise invert is not defined for f64 coordinates",
        ))
    }

    /// Elementwise addition with a vector-shaped operand, or broadcast
    /// against a scalar.
    fn add(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Add)
    }

    /// Elementwise subtraction, or broadcast against a scalar.
    fn sub(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Sub)
    }

    /// Elementwise multiplication, or broadcast against a scalar.
    fn mul(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Mul)
    }

    /// Elementwise division. A zero anywhere in the divisor fails with
    /// [`VectorError::Arithmetic`] rather than producing an infinity.
    fn div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Div)
    }

    /// Elementwise division rounded toward negative infinity.
    fn floor_div(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::FloorDiv)
    }

    /// Elementwise remainder.
    fn rem(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Rem)
    }

    /// Elementwise exponentiation.
    fn pow(&self, rhs: impl Into<Operand>) -> Result<Self> {
        binary(self, rhs.into(), BinOp::Pow)
    }

    /// Dot product. Unlike the other binary operations this returns a bare
    /// scalar, and the operand must be vector-shaped: a scalar right-hand
    /// side fails the post-coercion type check.
    fn dot(&self, rhs: impl Into<Operand>) -> Result<f64> {
        let this = self.as_vector();
        let other = rhs.into().resolve()?.into_vector(Self::KIND_NAME)?;
        if other.d() != this.d() {
            return Err(VectorError::DimensionMismatch {
                expected: this.d(),
                actual: other.d(),
            });
        }
        Ok(this
            .coordinates()
            .iter()
            .zip(other.coordinates().iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Magnitude: Euclidean distance to the zero vector of the same
    /// dimensionality.
    fn distance(&self) -> f64 {
        let this = self.as_vector();
        this.l2_sqr_to(&vec![0.0; this.d()]).sqrt()
    }

    /// Euclidean distance to an explicit origin. The origin is coerced, must
    /// be vector-shaped, and must match the receiver's dimensionality.
    fn distance_to(&self, origin: impl Into<Operand>) -> Result<f64> {
        Ok(self.distance_to_sqr(origin)?.sqrt())
    }

    /// Squared Euclidean distance; spares the square root when only ranking
    /// matters.
    fn distance_to_sqr(&self, origin: impl Into<Operand>) -> Result<f64> {
        let this = self.as_vector();
        let origin = origin.into().resolve()?.into_vector(Self::KIND_NAME)?;
        if origin.d() != this.d() {
            return Err(VectorError::DimensionMismatch {
                expected: this.d(),
                actual: origin.d(),
            });
        }
        Ok(this.l2_sqr_to(origin.coordinates()))
    }

    /// Coercing equality: the operand must resolve to a vector, and then
    /// every coordinate must match exactly.
    fn try_eq(&self, rhs: impl Into<Operand>) -> Result<bool> {
        let other = rhs.into().resolve()?.into_vector(Self::KIND_NAME)?;
        Ok(*self.as_vector() == other)
    }

    /// Coercing magnitude comparison, the basis of `< > <= >=`.
    fn try_cmp(&self, rhs: impl Into<Operand>) -> Result<Ordering> {
        let other = rhs.into().resolve()?.into_vector(Self::KIND_NAME)?;
        Ok(self.as_vector().magnitude_cmp(&other))
    }
}

fn map_coords<T: VectorOps>(this: &T, f: impl FnMut(f64) -> f64) -> T {
    let mapped: Vec<f64> = this
        .as_vector()
        .coordinates()
        .iter()
        .copied()
        .map(f)
        .collect();
    this.rewrap(Vector::new(mapped))
}

fn binary<T: VectorOps>(this: &T, rhs: Operand, op: BinOp) -> Result<T> {
    let coordinates = this.as_vector().elementwise(rhs, op)?;
    Ok(this.rewrap(Vector::new(coordinates)))
}

impl VectorOps for Vector {
    const KIND_NAME: &'static str = "Vector";

    fn as_vector(&self) -> &Vector {
        self
    }

    fn rewrap(&self, vector: Vector) -> Vector {
        vector
    }
}

impl std::ops::Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        VectorOps::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn construction_is_lossless() {
        let coords = vec![1.0, -2.5, 3.0, 0.0];
        let vector = Vector::new(coords.clone());
        assert_eq!(vector.coordinates(), coords.as_slice());
        assert_eq!(vector.d(), 4);
    }

    #[test]
    fn equality_is_coordinate_wise() {
        assert_eq!(Vector::new([1.0, 2.0]), Vector::new([1.0, 2.0]));
        assert_ne!(Vector::new([1.0, 2.0]), Vector::new([1.0, 2.5]));
        assert_ne!(Vector::new([1.0, 2.0]), Vector::new([1.0, 2.0, 0.0]));
        // same magnitude, different direction
        assert_ne!(Vector::new([1.0, 0.0]), Vector::new([0.0, 1.0]));
    }

    #[test]
    fn name_does_not_affect_equality() {
        assert_eq!(
            Vector::new([1.0, 2.0]).with_name("a"),
            Vector::new([1.0, 2.0]).with_name("b"),
        );
    }

    #[test]
    fn magnitude_is_l2_norm() {
        assert_eq!(Vector::new([3.0, 4.0]).distance(), 5.0);
        assert_eq!(Vector::zeros(7).distance(), 0.0);
    }

    #[test]
    fn magnitude_matches_manual_norm_for_random_coordinates() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let d = rng.gen_range(1..8);
            let coords: Vec<f64> = (0..d).map(|_| rng.gen_range(-10.0..10.0)).collect();
            let manual = coords.iter().map(|c| c * c).sum::<f64>().sqrt();
            assert_eq!(Vector::new(coords).distance(), manual);
        }
    }

    #[test]
    fn distance_between_vectors() {
        let distance = Vector::new([3.0, 4.0])
            .distance_to(Vector::new([0.0, 0.0]))
            .unwrap();
        assert_eq!(distance, 5.0);
    }

    #[test]
    fn distance_generalizes_past_two_dimensions() {
        let distance = Vector::new([1.0, 2.0, 3.0, 4.0])
            .distance_to([2.0, 3.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(distance, 2.0);
    }

    #[test]
    fn distance_requires_matching_dimensionality() {
        let err = Vector::new([1.0, 2.0, 3.0])
            .distance_to(Vector::new([1.0, 2.0]))
            .unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn distance_rejects_scalar_origin() {
        let err = Vector::new([1.0, 2.0]).distance_to(5.0).unwrap_err();
        assert_eq!(err, VectorError::TypeMismatch { expected: "Vector" });
    }

    #[test]
    fn ordering_is_by_magnitude_not_coordinates() {
        // coordinate-wise incomparable, but magnitude 1 < magnitude 2
        assert!(Vector::new([1.0, 0.0]) < Vector::new([0.0, 2.0]));
        // equal magnitude orders as equal even though == is false
        let a = Vector::new([1.0, 0.0]);
        let b = Vector::new([0.0, 1.0]);
        assert!(a <= b);
        assert!(a >= b);
        assert!(a != b);
    }

    #[test]
    fn coercing_comparison_accepts_raw_sequences() {
        let vector = Vector::new([1.0, 1.0]);
        assert_eq!(vector.try_cmp([3.0, 4.0]).unwrap(), Ordering::Less);
        assert!(vector.try_eq((1.0, 1.0)).unwrap());
        assert!(!vector.try_eq([1.0, 2.0]).unwrap());
    }

    #[test]
    fn comparison_rejects_scalar_operand() {
        let err = Vector::new([1.0, 1.0]).try_cmp(3.0).unwrap_err();
        assert_eq!(err, VectorError::TypeMismatch { expected: "Vector" });
    }

    #[test]
    fn addition_with_vector_and_raw_sequence_agree() {
        let vector = Vector::new([1.0, 2.0]);
        let via_vector = vector.add(Vector::new([3.0, 4.0])).unwrap();
        let via_tuple = vector.add((3.0, 4.0)).unwrap();
        assert_eq!(via_vector, via_tuple);
        assert_eq!(via_vector, Vector::new([4.0, 6.0]));
    }

    #[test]
    fn scalar_operands_broadcast() {
        let vector = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(vector.add(1.0).unwrap(), Vector::new([2.0, 3.0, 4.0]));
        assert_eq!(vector.mul(2.0).unwrap(), Vector::new([2.0, 4.0, 6.0]));
        assert_eq!(vector.sub(1).unwrap(), Vector::new([0.0, 1.0, 2.0]));
    }

    #[test]
    fn elementwise_arithmetic() {
        let vector = Vector::new([6.0, 8.0]);
        assert_eq!(vector.sub([1.0, 2.0]).unwrap(), Vector::new([5.0, 6.0]));
        assert_eq!(vector.mul([2.0, 0.5]).unwrap(), Vector::new([12.0, 4.0]));
        assert_eq!(vector.div([2.0, 4.0]).unwrap(), Vector::new([3.0, 2.0]));
        assert_eq!(vector.floor_div([4.0, 3.0]).unwrap(), Vector::new([1.0, 2.0]));
        assert_eq!(vector.rem([4.0, 3.0]).unwrap(), Vector::new([2.0, 2.0]));
        assert_eq!(
            vector.pow(2.0).unwrap(),
            Vector::new([6.0_f64.powf(2.0), 8.0_f64.powf(2.0)]),
        );
    }

    #[test]
    fn remainder_is_floored_modulo() {
        // the result takes the divisor's sign, not the dividend's
        let vector = Vector::new([-7.0, 7.0]);
        assert_eq!(vector.rem(3.0).unwrap(), Vector::new([2.0, 1.0]));
        assert_eq!(vector.rem(-3.0).unwrap(), Vector::new([-1.0, -2.0]));
    }

    #[test]
    fn floored_division_identity_holds_for_negative_operands() {
        // b * floor_div(a, b) + rem(a, b) == a
        for (a, b) in [(-7.0, 3.0), (7.0, -3.0), (-7.0, -3.0), (7.0, 3.0)] {
            let vector = Vector::new([a]);
            let quotient = vector.floor_div(b).unwrap();
            let remainder = vector.rem(b).unwrap();
            assert_eq!(quotient.mul(b).unwrap().add(remainder).unwrap(), vector);
        }
    }

    #[test]
    fn arithmetic_requires_matching_dimensionality() {
        let err = Vector::new([1.0, 2.0]).add([1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let vector = Vector::new([1.0, 2.0]);
        assert_eq!(
            vector.div(0.0).unwrap_err(),
            VectorError::Arithmetic("division by zero")
        );
        assert_eq!(
            vector.div([1.0, 0.0]).unwrap_err(),
            VectorError::Arithmetic("division by zero")
        );
        assert_eq!(
            vector.rem(0.0).unwrap_err(),
            VectorError::Arithmetic("remainder by zero")
        );
    }

    #[test]
    fn textual_operand_is_unsupported() {
        let err = Vector::new([1.0, 2.0]).add("(1, 2)").unwrap_err();
        assert_eq!(err, VectorError::UnsupportedOperand { kind: "str" });
    }

    #[test]
    fn dot_product_returns_bare_scalar() {
        let result = Vector::new([1.0, 2.0, 3.0]).dot([4.0, 5.0, 6.0]).unwrap();
        assert_eq!(result, 32.0);
    }

    #[test]
    fn dot_product_rejects_scalar_operand() {
        let err = Vector::new([1.0, 2.0]).dot(3.0).unwrap_err();
        assert_eq!(err, VectorError::TypeMismatch { expected: "Vector" });
    }

    #[test]
    fn unary_operations_return_fresh_values() {
        let vector = Vector::new([1.5, -2.0]);
        assert_eq!(vector.pos(), vector);
        assert_eq!(vector.neg(), Vector::new([-1.5, 2.0]));
        assert_eq!(-&vector, Vector::new([-1.5, 2.0]));
        assert_eq!(vector.abs(), Vector::new([1.5, 2.0]));
    }

    #[test]
    fn operation_results_are_unlabeled() {
        let named = Vector::new([1.0, 2.0]).with_name("a");
        assert_eq!(named.pos().name(), None);
        assert_eq!(named.neg().name(), None);
        assert_eq!(named.add(1.0).unwrap().name(), None);
    }

    #[test]
    fn invert_is_unsupported_for_float_coordinates() {
        let err = Vector::new([1.0, 2.0]).invert().unwrap_err();
        assert!(matches!(err, VectorError::UnsupportedOperation(_)));
    }

    #[test]
    fn indexed_reads_and_writes() {
        let mut vector = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(vector[0], 1.0);
        assert_eq!(&vector[1..3], &[2.0, 3.0]);
        assert_eq!(vector.get(2), Some(3.0));
        assert_eq!(vector.get(3), None);

        vector[1] = 5.0;
        vector.set(2, 6.0).unwrap();
        assert_eq!(vector.coordinates(), &[1.0, 5.0, 6.0]);

        let err = vector.set(3, 0.0).unwrap_err();
        assert_eq!(err, VectorError::OutOfBounds { index: 3, len: 3 });
    }

    #[test]
    fn every_slice_shape_indexes() {
        let vector = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(&vector[..], &[1.0, 2.0, 3.0]);
        assert_eq!(&vector[1..], &[2.0, 3.0]);
        assert_eq!(&vector[..2], &[1.0, 2.0]);
        assert_eq!(&vector[0..=1], &[1.0, 2.0]);
    }

    #[test]
    fn slice_writes_must_match_addressed_length() {
        let mut vector = Vector::new([1.0, 2.0, 3.0]);
        vector.set_slice(0..2, &[9.0, 8.0]).unwrap();
        assert_eq!(vector.coordinates(), &[9.0, 8.0, 3.0]);

        let err = vector.set_slice(0..2, &[1.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
        // failed write leaves the vector untouched
        assert_eq!(vector.coordinates(), &[9.0, 8.0, 3.0]);
    }

    #[test]
    fn coordinates_cannot_be_removed() {
        let mut vector = Vector::new([1.0, 2.0]);
        let err = vector.remove(0).unwrap_err();
        assert!(matches!(err, VectorError::UnsupportedOperation(_)));
        assert_eq!(vector.d(), 2);
    }

    #[test]
    fn clone_is_an_independent_copy() {
        let original = Vector::new([1.0, 2.0]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy[0] = 9.0;
        assert_ne!(copy, original);
        assert_eq!(original.coordinates(), &[1.0, 2.0]);
    }

    #[test]
    fn display_includes_optional_name() {
        assert_eq!(Vector::new([1.0, 2.5]).to_string(), "Vector(1, 2.5)");
        assert_eq!(
            Vector::new([1.0, 2.5]).with_name("origin offset").to_string(),
            "Vector<\"origin offset\">(1, 2.5)",
        );
    }
}
