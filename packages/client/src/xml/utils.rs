//! XML utility functions for navigating DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wolframalpha_client::xml::get_tag_name;
///
/// let xml = r#"<queryresult><pod/></queryresult>"#;
/// let doc = Document::parse(xml).unwrap();
/// let pod = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(pod), "pod");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Concatenate the direct text children of a node, trimmed.
///
/// Text inside child elements is not included.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wolframalpha_client::xml::collect_text;
///
/// let xml = r#"<plaintext>  3.14159  </plaintext>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(collect_text(doc.root_element()), "3.14159");
/// ```
pub fn collect_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    text.trim().to_string()
}
