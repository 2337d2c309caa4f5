use ldap3::ldap_escape;

/// Build the search filter: the term appears as a substring in any of the
/// configured attributes, AND the entry carries a mail attribute.
///
/// `(&(|(<a1>=*TERM*)...(<aN>=*TERM*))(mail=*))`
///
/// The term is escaped per the filter grammar, so metacharacters in user
/// input match literally. An empty term degenerates to a presence clause
/// per attribute instead of the invalid `(attr=**)`.
///
/// `attrs` must hold at least one attribute; an empty list has no valid
/// filter. A validated [`GmlqConfig`](crate::config::GmlqConfig) guarantees
/// this.
pub fn build(attrs: &[String], term: &str) -> String {
    debug_assert!(!attrs.is_empty(), "filter needs at least one match attribute");

    let escaped = ldap_escape(term);

    let mut filter = String::from("(&(|");
    for attr in attrs {
        if escaped.is_empty() {
            filter.push_str(&format!("({attr}=*)"));
        } else {
            filter.push_str(&format!("({attr}=*{escaped}*)"));
        }
    }
    filter.push_str(")(mail=*))");
    filter
}
