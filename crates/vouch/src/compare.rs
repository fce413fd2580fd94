use core::fmt;

use serde::Serialize;

use crate::config::parse_flag;
use crate::error::{CompareError, ConfigurationError};
use crate::tree::Node;

/// Options controlling structural comparison in [`check::equal_with`] and
/// friends.
///
/// Values are compared through their [`Serialize`] implementation, which lets
/// options address individual fields by path.
///
/// ```
/// use serde::Serialize;
/// use vouch::{check, Options};
///
/// #[derive(Debug, Serialize)]
/// struct Row {
///     id: u64,
///     name: &'static str,
/// }
///
/// vouch::test(|t| {
///     let options = Options::new().ignore("id");
///     check::equal_with(t, Row { id: 1, name: "a" }, Row { id: 2, name: "a" }, &options);
/// });
/// ```
///
/// [`check::equal_with`]: crate::check::equal_with
pub struct Options<'a, T: ?Sized> {
    /// Paths excluded from comparison.
    ignore: Vec<Path>,
    /// Treat missing values and empty containers as equal.
    equate_empty: bool,
    /// Tolerance when comparing numbers.
    epsilon: Option<f64>,
    /// Comparator overriding everything else.
    comparer: Option<Box<dyn Fn(&T, &T) -> bool + 'a>>,
}

impl<'a, T: ?Sized> Options<'a, T> {
    /// Construct default options, which compare every field exactly.
    pub fn new() -> Self {
        Self {
            ignore: Vec::new(),
            equate_empty: false,
            epsilon: None,
            comparer: None,
        }
    }

    /// Exclude the given path from comparison.
    ///
    /// A path is a sequence of segments separated by `.`. A segment matches a
    /// map key or struct field with the same name, a sequence index if it is a
    /// number, and anything at all if it is `*`. Enum variants are addressed by
    /// their serialized name, so `Shape::Circle { radius }` is
    /// `Circle.radius`. Optional values are transparent to paths.
    pub fn ignore(mut self, path: &str) -> Self {
        self.ignore.push(Path::parse(path));
        self
    }

    /// Treat a missing value as equal to an empty sequence or map.
    pub fn equate_empty(mut self) -> Self {
        self.equate_empty = true;
        self
    }

    /// Treat numbers within `epsilon` of each other as equal.
    pub fn approximate(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Decide equality with the given function instead.
    ///
    /// Other options do not apply when a comparer is set, but they still shape
    /// the diff shown on failure. The comparer may borrow from its
    /// environment:
    ///
    /// ```
    /// use vouch::{check, Options};
    ///
    /// let tolerance = 2;
    ///
    /// vouch::test(|t| {
    ///     let options = Options::new().comparer(|a: &i32, b: &i32| (a - b).abs() <= tolerance);
    ///     check::equal_with(t, 10, 12, &options);
    /// });
    /// ```
    pub fn comparer<F>(mut self, comparer: F) -> Self
    where
        F: 'a + Fn(&T, &T) -> bool,
    {
        self.comparer = Some(Box::new(comparer));
        self
    }

    /// Parse the given option.
    ///
    /// Supported options are `ignore=<path>`, `equate-empty[=<bool>]` and
    /// `approximate=<epsilon>`.
    pub fn parse_option(&mut self, option: &str) -> Result<(), ConfigurationError> {
        let mut it = option.splitn(2, '=');

        match it.next() {
            Some(key @ "ignore") => match it.next() {
                Some(path) if !path.is_empty() => {
                    self.ignore.push(Path::parse(path));
                }
                value => {
                    return Err(invalid_value(key, value));
                }
            },
            Some(key @ "equate-empty") => {
                self.equate_empty = parse_flag(key, it.next())?;
            }
            Some(key @ "approximate") => {
                let value = it.next();

                match value.and_then(|value| value.parse::<f64>().ok()) {
                    Some(epsilon) if epsilon.is_finite() && epsilon >= 0.0 => {
                        self.epsilon = Some(epsilon);
                    }
                    _ => {
                        return Err(invalid_value(key, value));
                    }
                }
            }
            _ => {
                return Err(ConfigurationError::UnsupportedOption {
                    option: option.to_owned(),
                });
            }
        }

        Ok(())
    }
}

impl<T: ?Sized + Serialize> Options<'_, T> {
    /// Test if `want` and `got` are equal under these options.
    ///
    /// Errors if either value cannot be serialized.
    pub fn is_equal(&self, want: &T, got: &T) -> Result<bool, CompareError> {
        if let Some(comparer) = &self.comparer {
            return Ok(comparer(want, got));
        }

        let want = self.normalize(want)?;
        let got = self.normalize(got)?;
        Ok(self.equivalent(&want, &got))
    }

    /// Compare `want` and `got`, rendering both sides if they differ.
    pub(crate) fn compare(&self, want: &T, got: &T) -> Result<Comparison, CompareError> {
        if self.is_equal(want, got)? {
            return Ok(Comparison::Equal);
        }

        let want = format!("{:#}", self.normalize(want)?.to_json());
        let got = format!("{:#}", self.normalize(got)?.to_json());
        Ok(Comparison::Different { want, got })
    }

    /// Serialize a value and strip every ignored path from it.
    fn normalize(&self, value: &T) -> Result<Node, CompareError> {
        let mut node = Node::from_value(value)?;

        for path in &self.ignore {
            prune(&mut node, &path.segments);
        }

        Ok(node)
    }
}

impl<T: ?Sized> Options<'_, T> {
    fn equivalent(&self, a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::Int(a), Node::Int(b)) if self.epsilon.is_none() => a == b,
            (Node::Float(a), Node::Float(b)) if self.epsilon.is_none() => a == b,
            (Node::Int(..) | Node::Float(..), Node::Int(..) | Node::Float(..)) => {
                match (self.epsilon, a.as_f64(), b.as_f64()) {
                    (Some(epsilon), Some(a), Some(b)) => a == b || (a - b).abs() <= epsilon,
                    _ => false,
                }
            }
            (Node::Some(a), Node::Some(b)) => self.equivalent(a, b),
            (Node::Seq(a), Node::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| self.equivalent(a, b))
            }
            (Node::Map(a), Node::Map(b)) => {
                let mut keys = a.keys().chain(b.keys().filter(|key| !a.contains_key(*key)));

                keys.all(|key| match (a.get(key), b.get(key)) {
                    (Some(a), Some(b)) => self.equivalent(a, b),
                    (Some(value), None) | (None, Some(value)) => {
                        self.equate_empty && value.is_empty()
                    }
                    (None, None) => true,
                })
            }
            (a, b) if self.equate_empty && a.is_empty() && b.is_empty() => true,
            (Node::Unit, Node::Unit) | (Node::None, Node::None) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Str(a), Node::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: ?Sized> Default for Options<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Options<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("ignore", &self.ignore)
            .field("equate_empty", &self.equate_empty)
            .field("epsilon", &self.epsilon)
            .field("comparer", &self.comparer.is_some())
            .finish()
    }
}

/// The outcome of [`Options::compare`].
pub(crate) enum Comparison {
    Equal,
    Different { want: String, got: String },
}

/// A parsed path used by [`Options::ignore`].
#[derive(Debug, Clone, PartialEq, Eq)]
struct Path {
    segments: Vec<Segment>,
}

impl Path {
    fn parse(path: &str) -> Self {
        let segments = path
            .split('.')
            .map(|segment| match segment {
                "*" => Segment::Any,
                name => Segment::Name(name.to_owned()),
            })
            .collect();

        Self { segments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Any,
    Name(String),
}

impl Segment {
    fn matches_key(&self, key: &str) -> bool {
        match self {
            Segment::Any => true,
            Segment::Name(name) => name == key,
        }
    }

    fn matches_index(&self, index: usize) -> bool {
        match self {
            Segment::Any => true,
            Segment::Name(name) => name.parse::<usize>().map_or(false, |n| n == index),
        }
    }
}

/// Remove whatever `segments` points to inside of `node`.
///
/// Map entries are removed, sequence elements are replaced with unit so that
/// indexes of later elements stay put.
fn prune(node: &mut Node, segments: &[Segment]) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    match node {
        Node::Map(map) => {
            if rest.is_empty() {
                map.retain(|key, _| !first.matches_key(key));
            } else {
                for (key, value) in map.iter_mut() {
                    if first.matches_key(key) {
                        prune(value, rest);
                    }
                }
            }
        }
        Node::Seq(items) => {
            for (index, value) in items.iter_mut().enumerate() {
                if !first.matches_index(index) {
                    continue;
                }

                if rest.is_empty() {
                    *value = Node::Unit;
                } else {
                    prune(value, rest);
                }
            }
        }
        Node::Some(value) => prune(value, segments),
        _ => {}
    }
}

fn invalid_value(option: &str, value: Option<&str>) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        option: option.to_owned(),
        value: value.unwrap_or_default().to_owned(),
    }
}
