use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use matchit::Params;

/// A set of named, string-valued parameters, usually extracted from a matched route.
///
/// `lookup` never fails: it returns an empty string if there is no parameter
/// registered under the given name.
/// A missing parameter and a parameter set to an empty string are therefore
/// indistinguishable.
pub trait ParamSource {
    /// Returns the value of the parameter named `name`, or an empty string.
    fn lookup(&self, name: &str) -> &str;
}

/// Values are looked up exactly as they were matched: they are **not** percent-decoded.
impl ParamSource for Params<'_, '_> {
    fn lookup(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }
}

impl<K, V, S> ParamSource for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> &str {
        self.get(name).map(AsRef::as_ref).unwrap_or_default()
    }
}

impl<K, V> ParamSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> &str {
        self.get(name).map(AsRef::as_ref).unwrap_or_default()
    }
}

/// The first pair whose key matches wins.
impl<K, V> ParamSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> &str {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
            .unwrap_or_default()
    }
}

impl<K, V, const N: usize> ParamSource for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> &str {
        self.as_slice().lookup(name)
    }
}

impl<T> ParamSource for &T
where
    T: ParamSource + ?Sized,
{
    fn lookup(&self, name: &str) -> &str {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_are_empty() {
        let map: HashMap<String, String> = HashMap::new();
        assert_eq!(map.lookup("id"), "");

        let tree = BTreeMap::from([("id", "1")]);
        assert_eq!(tree.lookup("id"), "1");
        assert_eq!(tree.lookup("name"), "");
    }

    #[test]
    fn pairs_are_searched_in_order() {
        let pairs = [("id", "1"), ("id", "2"), ("name", "alice")];
        assert_eq!(pairs.lookup("id"), "1");
        assert_eq!(pairs.lookup("name"), "alice");
        assert_eq!(pairs[..].lookup("missing"), "");
    }

    #[test]
    fn references_are_sources_too() {
        let map = HashMap::from([("id".to_owned(), "7".to_owned())]);
        let by_ref = &map;
        assert_eq!(ParamSource::lookup(&by_ref, "id"), "7");
    }
}
