// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(s!(css)))
}

/// All text below `el`, concatenated, exactly as it appears in the markup.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `raw_text`, trimmed at both ends (Unicode whitespace, so `&nbsp;` goes too).
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    let raw = raw_text(el);
    let t = raw.trim();
    if t.len() == raw.len() { raw } else { s!(t) }
}

/// The element's lone string: its only child is a text node, or an element
/// whose lone string this is (`<td><b>Event</b></td>` gives "Event").
/// `None` when any level has zero or several children.
pub fn single_string(el: ElementRef<'_>) -> Option<&str> {
    let mut node = *el;
    loop {
        let mut children = node.children();
        let only = children.next()?;
        if children.next().is_some() { return None; }
        match only.value() {
            Node::Text(text) => return Some(&**text),
            Node::Element(_) => node = only,
            _ => return None,
        }
    }
}

/// Next sibling that is an element, skipping whitespace text nodes.
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// First `<a href>` whose href contains `marker`, in document order.
pub fn first_href_containing<'a>(doc: &'a Html, marker: &str) -> Result<Option<&'a str>> {
    let a = selector("a[href]")?;
    Ok(doc
        .select(&a)
        .filter_map(|el| el.value().attr("href"))
        .find(|href| href.contains(marker)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_helpers() {
        let doc = Html::parse_fragment("<p> <b>One</b>\u{a0}two </p>");
        let p = doc.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(raw_text(p), " One\u{a0}two ");
        assert_eq!(trimmed_text(p), "One\u{a0}two");
        assert_eq!(single_string(p), None);
    }

    #[test]
    fn sibling_skips_whitespace_nodes() {
        let doc = Html::parse_document(
            "<table><tr><td>Event</td>\n   <td>Lake Regional</td></tr></table>",
        );
        let td = doc.select(&selector("td").unwrap()).next().unwrap();
        assert_eq!(single_string(td), Some("Event"));
        let next = next_element_sibling(td).unwrap();
        assert_eq!(trimmed_text(next), "Lake Regional");
    }

    #[test]
    fn single_string_follows_lone_child_elements() {
        let doc = Html::parse_fragment(
            "<div><b><i>Event</i></b></div><div><b>Event</b> name</div><div></div><div><!-- c --></div>",
        );
        let divs: Vec<_> = doc.select(&selector("div").unwrap()).collect();
        assert_eq!(single_string(divs[0]), Some("Event"));
        assert_eq!(single_string(divs[1]), None);
        assert_eq!(single_string(divs[2]), None);
        assert_eq!(single_string(divs[3]), None);
    }

    #[test]
    fn href_lookup_is_document_order() {
        let doc = Html::parse_document(
            r#"<a href="/x?page=awards">A</a><a>no href</a><a href="/x?page=matchresults&e=1">M</a>
               <a href="/x?page=matchresults&e=2">M2</a>"#,
        );
        assert_eq!(
            first_href_containing(&doc, "matchresults").unwrap(),
            Some("/x?page=matchresults&e=1")
        );
        assert_eq!(first_href_containing(&doc, "standings").unwrap(), None);
    }
}
