//! Values that live in a space.

use std::borrow::Cow;
use std::fmt;

/// A dynamically typed member of some space.
///
/// Leaf spaces produce scalars or flat arrays; composite spaces produce
/// `Tuple`s. `List` is accepted wherever an ordered sequence is expected and
/// is treated like a tuple by membership tests.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Int(i64),
    Float(f64),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    Tuple(Vec<Element>),
    List(Vec<Element>),
}

impl Element {
    /// View any ordered-sequence representation as its tuple parts.
    ///
    /// Arrays are split into scalar elements. Scalars have no parts.
    pub fn as_parts(&self) -> Option<Cow<'_, [Element]>> {
        match self {
            Element::Tuple(parts) | Element::List(parts) => Some(Cow::Borrowed(parts)),
            Element::IntArray(v) => Some(Cow::Owned(v.iter().copied().map(Element::Int).collect())),
            Element::FloatArray(v) => {
                Some(Cow::Owned(v.iter().copied().map(Element::Float).collect()))
            }
            Element::Int(_) | Element::Float(_) => None,
        }
    }

    /// Integers of an int array, or of a tuple/list made only of `Int`s.
    pub fn to_ints(&self) -> Option<Cow<'_, [i64]>> {
        match self {
            Element::IntArray(v) => Some(Cow::Borrowed(v)),
            Element::Tuple(parts) | Element::List(parts) => {
                parts.iter().map(Element::as_int).collect::<Option<Vec<_>>>().map(Cow::Owned)
            }
            _ => None,
        }
    }

    /// Numbers of a numeric array, or of a tuple/list made only of scalars.
    pub fn to_floats(&self) -> Option<Cow<'_, [f64]>> {
        match self {
            Element::FloatArray(v) => Some(Cow::Borrowed(v)),
            Element::IntArray(v) => Some(Cow::Owned(v.iter().map(|&x| x as f64).collect())),
            Element::Tuple(parts) | Element::List(parts) => parts
                .iter()
                .map(|p| match p {
                    Element::Int(v) => Some(*v as f64),
                    Element::Float(v) => Some(*v),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Cow::Owned),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Element::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i64]> {
        match self {
            Element::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_array(&self) -> Option<&[f64]> {
        match self {
            Element::FloatArray(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            open: &str,
            items: &[T],
            close: &str,
        ) -> fmt::Result {
            f.write_str(open)?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            f.write_str(close)
        }

        match self {
            Element::Int(v) => write!(f, "{v}"),
            Element::Float(v) => write!(f, "{v}"),
            Element::IntArray(v) => seq(f, "[", v, "]"),
            Element::FloatArray(v) => seq(f, "[", v, "]"),
            Element::Tuple(v) => seq(f, "(", v, ")"),
            Element::List(v) => seq(f, "[", v, "]"),
        }
    }
}

impl From<i64> for Element { fn from(v: i64) -> Self { Element::Int(v) } }
impl From<i32> for Element { fn from(v: i32) -> Self { Element::Int(v as i64) } }
impl From<u32> for Element { fn from(v: u32) -> Self { Element::Int(v as i64) } }
impl From<f64> for Element { fn from(v: f64) -> Self { Element::Float(v) } }
impl From<Vec<i64>> for Element { fn from(v: Vec<i64>) -> Self { Element::IntArray(v) } }
impl From<Vec<f64>> for Element { fn from(v: Vec<f64>) -> Self { Element::FloatArray(v) } }
impl From<Vec<Element>> for Element { fn from(v: Vec<Element>) -> Self { Element::List(v) } }

impl<A: Into<Element>, B: Into<Element>> From<(A, B)> for Element {
    fn from((a, b): (A, B)) -> Self {
        Element::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Element>, B: Into<Element>, C: Into<Element>> From<(A, B, C)> for Element {
    fn from((a, b, c): (A, B, C)) -> Self {
        Element::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
