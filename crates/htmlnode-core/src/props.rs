//! Element attributes and their markup form.

use indexmap::IndexMap;

/// Element attributes, kept in insertion order
pub type Props = IndexMap<String, String>;

/// Serialize attributes for an opening tag.
///
/// Every entry becomes ` key="value"` (note the leading space), in insertion
/// order. Absent or empty props produce an empty string. Values are written
/// as given, without escaping.
pub fn props_to_html(props: Option<&Props>) -> String {
    let mut out = String::new();
    write_props(props, &mut out);
    out
}

pub(crate) fn write_props(props: Option<&Props>, out: &mut String) {
    let Some(props) = props else {
        return;
    };

    for (name, value) in props {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Props {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_absent_props() {
        assert_eq!(props_to_html(None), "");
    }

    #[test]
    fn test_empty_props() {
        assert_eq!(props_to_html(Some(&Props::new())), "");
    }

    #[test]
    fn test_single_prop() {
        let p = props(&[("href", "https://www.google.com")]);
        assert_eq!(props_to_html(Some(&p)), " href=\"https://www.google.com\"");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let p = props(&[("target", "_blank"), ("href", "https://x.test"), ("class", "ext")]);
        assert_eq!(
            props_to_html(Some(&p)),
            " target=\"_blank\" href=\"https://x.test\" class=\"ext\""
        );

        // Same entries in another order give another string
        let q = props(&[("class", "ext"), ("href", "https://x.test"), ("target", "_blank")]);
        assert_eq!(
            props_to_html(Some(&q)),
            " class=\"ext\" href=\"https://x.test\" target=\"_blank\""
        );
    }

    #[test]
    fn test_no_escaping() {
        let p = props(&[("title", "a \"quoted\" <tag>")]);
        assert_eq!(props_to_html(Some(&p)), " title=\"a \"quoted\" <tag>\"");
    }

    #[test]
    fn test_reinsert_keeps_first_position() {
        let mut p = props(&[("id", "a"), ("class", "b")]);
        p.insert("id".to_string(), "c".to_string());
        assert_eq!(props_to_html(Some(&p)), " id=\"c\" class=\"b\"");
    }
}
