//! Deep, structure-preserving copies.
//!
//! [`Redact`] borrows a value and builds a fresh one of the same type. Strings
//! go through the [`RedactionMapper`], containers recurse, and everything else
//! is copied as is.
//!
//! ## Container Implementations
//!
//! | Shape | Types | Behavior |
//! |-------|-------|----------|
//! | String | `String`, `Cow<str>`, `Box<str>`, `Rc<str>`, `Arc<str>` | mapped |
//! | Optional | `Option<T>`, `Box<T>`, `Rc<T>`, `Arc<T>` | new holder around the redacted inner value |
//! | Sequence | `Vec<T>`, `VecDeque<T>`, `[T; N]`, `Box<[T]>` | element-wise, order kept |
//! | Mapping | `HashMap<K, V>`, `BTreeMap<K, V>` | values redacted, keys cloned |
//! | Set | `HashSet<T>`, `BTreeSet<T>` | cloned: elements are keys |
//! | Record | tuples, `Result<T, E>`, `#[derive(Redact)]` types | field-wise |
//! | Opaque | numbers, `bool`, `char`, `()`, time and address types | copied |
//!
//! Set elements are treated like mapping keys. Redacting them could collapse
//! two elements into one and change the length of the set.
//!
//! ## Cycles
//!
//! Only owning containers are traversed. Cycles need interior mutability
//! (`RefCell`, `Mutex`, `Weak`), none of which implement `Redact`, so every
//! traversal terminates.

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6},
    rc::Rc,
    sync::Arc,
    time::{Duration, Instant, SystemTime},
};

use super::RedactionMapper;
use crate::value::{Fields, Record, Value};

/// A type that can produce a redacted deep copy of itself.
///
/// Implemented for std containers and derived with `#[derive(Redact)]` for
/// structs and enums. The input is only borrowed; the output shares no
/// allocation with it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Redact`",
    label = "this type cannot be walked for redaction",
    note = "use `#[derive(Redact)]` on the type definition",
    note = "or mark the field `#[redact(skip)]` to copy it verbatim"
)]
pub trait Redact: Sized {
    /// Returns a copy of `self` with every string leaf mapped through `mapper`.
    #[must_use]
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self;
}

// =============================================================================
// Dynamic values
// =============================================================================

impl Redact for Value {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        match self {
            Self::String(value) => Self::String(mapper.map_str(value)),
            Self::Optional(None) => Self::Optional(None),
            Self::Optional(Some(inner)) => Self::Optional(Some(inner.redact_with(mapper))),
            Self::Record(record) => Self::Record(record.redact_with(mapper)),
            Self::Sequence(items) => Self::Sequence(items.redact_with(mapper)),
            Self::Mapping(map) => Self::Mapping(map.redact_with(mapper)),
            Self::Opaque(opaque) => Self::Opaque(opaque.clone()),
        }
    }
}

impl Redact for Record {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        let fields = match self.fields() {
            Fields::Named(fields) => Fields::Named(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.redact_with(mapper)))
                    .collect(),
            ),
            Fields::Positional(fields) => Fields::Positional(fields.redact_with(mapper)),
            Fields::Unit => Fields::Unit,
        };
        Record::new(self.name(), fields)
    }
}

// =============================================================================
// Strings
// =============================================================================

impl Redact for String {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        mapper.map_str(self)
    }
}

impl Redact for Cow<'_, str> {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Cow::Owned(mapper.map_str(self))
    }
}

impl Redact for Box<str> {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        mapper.map_str(self).into_boxed_str()
    }
}

impl Redact for Rc<str> {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Rc::from(mapper.map_str(self))
    }
}

impl Redact for Arc<str> {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Arc::from(mapper.map_str(self))
    }
}

// =============================================================================
// Opaque values
// =============================================================================

macro_rules! impl_redact_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Redact for $ty {
                fn redact_with<M: RedactionMapper + ?Sized>(&self, _mapper: &M) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_redact_opaque!(
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    Duration, Instant, SystemTime,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6,
);

impl<T: ?Sized> Redact for PhantomData<T> {
    fn redact_with<M: RedactionMapper + ?Sized>(&self, _mapper: &M) -> Self {
        PhantomData
    }
}

// =============================================================================
// Optionals and holders
// =============================================================================

impl<T> Redact for Option<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.as_ref().map(|value| value.redact_with(mapper))
    }
}

impl<T, E> Redact for Result<T, E>
where
    T: Redact,
    E: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        match self {
            Ok(value) => Ok(value.redact_with(mapper)),
            Err(err) => Err(err.redact_with(mapper)),
        }
    }
}

impl<T> Redact for Box<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Box::new((**self).redact_with(mapper))
    }
}

impl<T> Redact for Rc<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Rc::new((**self).redact_with(mapper))
    }
}

impl<T> Redact for Arc<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        Arc::new((**self).redact_with(mapper))
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T> Redact for Vec<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.iter().map(|value| value.redact_with(mapper)).collect()
    }
}

impl<T> Redact for VecDeque<T>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.iter().map(|value| value.redact_with(mapper)).collect()
    }
}

impl<T> Redact for Box<[T]>
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.iter().map(|value| value.redact_with(mapper)).collect()
    }
}

impl<T, const N: usize> Redact for [T; N]
where
    T: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.each_ref().map(|value| value.redact_with(mapper))
    }
}

// =============================================================================
// Mappings and sets
// =============================================================================

impl<K, V, S> Redact for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Redact,
    S: BuildHasher + Clone,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), value.redact_with(mapper))),
        );
        result
    }
}

impl<K, V> Redact for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: Redact,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), value.redact_with(mapper)))
            .collect()
    }
}

impl<T, S> Redact for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, _mapper: &M) -> Self {
        self.clone()
    }
}

impl<T> Redact for BTreeSet<T>
where
    T: Clone + Ord,
{
    fn redact_with<M: RedactionMapper + ?Sized>(&self, _mapper: &M) -> Self {
        self.clone()
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! impl_redact_tuple {
    ($($name:ident)+) => {
        impl<$($name: Redact),+> Redact for ($($name,)+) {
            #[allow(non_snake_case)]
            fn redact_with<M: RedactionMapper + ?Sized>(&self, mapper: &M) -> Self {
                let ($($name,)+) = self;
                ($($name.redact_with(mapper),)+)
            }
        }
    };
}

impl_redact_tuple!(A);
impl_redact_tuple!(A B);
impl_redact_tuple!(A B C);
impl_redact_tuple!(A B C D);
impl_redact_tuple!(A B C D E);
impl_redact_tuple!(A B C D E F);
impl_redact_tuple!(A B C D E F G);
impl_redact_tuple!(A B C D E F G H);
impl_redact_tuple!(A B C D E F G H I);
impl_redact_tuple!(A B C D E F G H I J);
impl_redact_tuple!(A B C D E F G H I J K);
impl_redact_tuple!(A B C D E F G H I J K L);

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
        rc::Rc,
        sync::Arc,
    };

    use super::Redact;
    use crate::{redaction::RedactionMapper, Key, Opaque, Record, Value};

    /// Upper-cases every string so traversal is visible without patterns.
    struct Upper;

    impl RedactionMapper for Upper {
        fn map_str(&self, value: &str) -> String {
            value.to_uppercase()
        }
    }

    #[test]
    fn string_like_leaves_are_mapped() {
        assert_eq!("abc".to_string().redact_with(&Upper), "ABC");
        let cow: Cow<'static, str> = Cow::Borrowed("abc");
        assert_eq!(cow.redact_with(&Upper), "ABC");
        let boxed: Box<str> = "abc".into();
        assert_eq!(&*boxed.redact_with(&Upper), "ABC");
        let rc: Rc<str> = Rc::from("abc");
        assert_eq!(&*rc.redact_with(&Upper), "ABC");
        let arc: Arc<str> = Arc::from("abc");
        assert_eq!(&*arc.redact_with(&Upper), "ABC");
    }

    #[test]
    fn option_traversal_maps_inner() {
        assert_eq!(Some("a".to_string()).redact_with(&Upper), Some("A".into()));
        assert_eq!(None::<String>.redact_with(&Upper), None);
    }

    #[test]
    fn result_traversal_maps_both_arms() {
        let ok: Result<String, String> = Ok("ok".into());
        assert_eq!(ok.redact_with(&Upper), Ok("OK".into()));
        let err: Result<String, String> = Err("err".into());
        assert_eq!(err.redact_with(&Upper), Err("ERR".into()));
    }

    #[test]
    fn holders_are_rebuilt() {
        let rc = Rc::new("a".to_string());
        let redacted = rc.redact_with(&Upper);
        assert_eq!(*redacted, "A");
        assert!(!Rc::ptr_eq(&rc, &redacted));
        assert_eq!(Rc::strong_count(&rc), 1);

        let arc = Arc::new(vec!["b".to_string()]);
        assert_eq!(*arc.redact_with(&Upper), vec!["B".to_string()]);
    }

    #[test]
    fn sequences_keep_order_and_length() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(values.redact_with(&Upper), vec!["A", "B"]);

        let deque: VecDeque<String> = VecDeque::from(vec!["c".to_string()]);
        assert_eq!(deque.redact_with(&Upper), VecDeque::from(vec!["C".to_string()]));

        let array = ["x".to_string(), "y".to_string()];
        assert_eq!(array.redact_with(&Upper), ["X".to_string(), "Y".to_string()]);

        let boxed: Box<[String]> = vec!["z".to_string()].into_boxed_slice();
        assert_eq!(&*boxed.redact_with(&Upper), ["Z".to_string()]);
    }

    #[test]
    fn map_values_are_mapped_and_keys_kept() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.insert("key".into(), "value".into());
        let redacted = map.redact_with(&Upper);
        assert_eq!(redacted["key"], "VALUE");
        assert!(!redacted.contains_key("KEY"));

        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        map.insert("k".into(), vec!["v".into()]);
        assert_eq!(map.redact_with(&Upper)["k"], vec!["V".to_string()]);
    }

    #[test]
    fn set_elements_are_kept() {
        let set: HashSet<String> = ["a".to_string(), "A".to_string()].into_iter().collect();
        let redacted = set.redact_with(&Upper);
        assert_eq!(redacted.len(), 2);
        assert!(redacted.contains("a"));

        let set: BTreeSet<String> = ["b".to_string()].into_iter().collect();
        assert!(set.redact_with(&Upper).contains("b"));
    }

    #[test]
    fn tuples_are_positional_records() {
        let tuple = ("a".to_string(), 3u32, Some("b".to_string()));
        assert_eq!(tuple.redact_with(&Upper), ("A".into(), 3, Some("B".into())));
    }

    #[test]
    fn opaque_values_are_copied() {
        assert_eq!(42i64.redact_with(&Upper), 42);
        assert!(true.redact_with(&Upper));
        assert_eq!('c'.redact_with(&Upper), 'c');
    }

    #[test]
    fn present_optional_keeps_a_single_box() {
        let value = Value::present(Value::present("inner"));
        let redacted = value.redact_with(&Upper);
        assert_eq!(redacted, Value::present(Value::present("INNER")));
        let Value::Optional(Some(outer)) = &redacted else {
            panic!("expected a present optional");
        };
        assert_eq!(**outer, Value::present("INNER"));
    }

    #[test]
    fn value_dispatch_covers_every_shape() {
        let mut map = BTreeMap::new();
        map.insert(Key::from("key"), Value::from("v"));
        let value = Value::Sequence(vec![
            Value::from("s"),
            Value::absent(),
            Value::present("p"),
            Value::from(Record::named("R", vec![("f".into(), "r".into())])),
            Value::from(Record::positional("T", vec!["t".into()])),
            Value::from(Record::unit("U")),
            Value::Mapping(map),
            Value::Opaque(Opaque::Bytes(b"raw".to_vec())),
        ]);

        let redacted = value.redact_with(&Upper);
        let items = redacted.as_sequence().unwrap();
        assert_eq!(items[0], Value::from("S"));
        assert_eq!(items[1], Value::absent());
        assert_eq!(items[2], Value::present("P"));
        assert_eq!(items[3].as_record().unwrap().get("f"), Some(&Value::from("R")));
        assert_eq!(items[4].as_record().unwrap().get_index(0), Some(&Value::from("T")));
        assert_eq!(items[5], Value::from(Record::unit("U")));
        assert_eq!(
            items[6].as_mapping().unwrap().get(&Key::from("key")),
            Some(&Value::from("V"))
        );
        assert_eq!(items[7], Value::Opaque(Opaque::Bytes(b"raw".to_vec())));
        assert!(value.same_shape(&redacted));
    }
}
