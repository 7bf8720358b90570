use super::{eq, regex, Matcher};

/// Creates a matcher that supports `*` as a multi character wildcard.
///
/// The pattern is compiled once at construction: literal segments are
/// escaped, joined with `.*` and anchored at both ends. A pattern without a
/// wildcard reduces to a plain [`Equal`](super::Equal) matcher.
pub fn wildcard(pattern: impl AsRef<str>) -> Box<dyn Matcher> {
    let pattern = pattern.as_ref();

    if !pattern.contains('*') {
        return Box::new(eq(pattern));
    }

    let mut source = String::with_capacity(pattern.len() + 4);
    source.push('^');

    for (i, part) in pattern.split('*').enumerate() {
        if i > 0 {
            source.push_str(".*");
        }

        source.push_str(&::regex::escape(part));
    }

    source.push('$');

    Box::new(regex(source))
}
