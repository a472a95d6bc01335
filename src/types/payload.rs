//! Blank-content detection for node payloads.

use std::collections::{BTreeMap, HashMap};

/// A value that can be stored as node content.
///
/// The graph refuses blank payloads at insertion time. Only emptiness and
/// absence count: empty strings and collections, `None` and JSON `null` are
/// blank. Scalars never are, so `false`, `0` and `0.0` are valid content.
pub trait Payload {
    fn is_blank(&self) -> bool;
}

impl Payload for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Payload for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<U> Payload for Vec<U> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<U> Payload for &[U] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Payload for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Payload for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<U: Payload> Payload for Option<U> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Payload::is_blank)
    }
}

impl<U: Payload + ?Sized> Payload for Box<U> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! never_blank {
    ($($t:ty),*) => {
        $(impl Payload for $t {
            fn is_blank(&self) -> bool {
                false
            }
        })*
    };
}

never_blank!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl Payload for serde_json::Value {
    fn is_blank(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => true,
            Value::Bool(_) | Value::Number(_) => false,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }
}
