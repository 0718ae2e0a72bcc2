use crate::compose::Environment;

/// Parses the engine's `KEY=VALUE` list.
///
/// A bare `KEY` is declared without a value, which is not the same as `KEY=`.
/// Only the first `=` separates key from value. Later duplicates overwrite earlier
/// ones in place.
pub fn map_environment(env: &[String]) -> Environment {
    let mut environment = Environment::new();
    for entry in env {
        match entry.split_once('=') {
            Some((key, value)) => environment.insert(key, Some(value.to_string())),
            None => environment.insert(entry.as_str(), None),
        }
    }
    environment
}
