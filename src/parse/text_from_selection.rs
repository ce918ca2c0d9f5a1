use super::{normalize::normalize, Error};
use scraper::{ElementRef, Node, Selector};

/// Finds the first element matching `selector` under `element`.
/// Errors when nothing matches, since every caller uses this for structural anchors.
pub fn select_anchor<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    anchor_label: &str,
) -> Result<ElementRef<'a>, Error> {
    element.select(selector).next().ok_or_else(|| {
        Error::HtmlParse(format!("The page should have a {anchor_label} element."))
    })
}

/// All text inside `element`, normalized into a single line.
pub fn inner_text(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<String>())
}

/// The text inside `element` split into normalized, non-empty lines.
/// `<br>`, literal newlines and the start of a block element begin a new line;
/// inline markup such as `<em>` stays part of the line around it.
pub fn inner_lines(element: ElementRef<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                let mut parts = text.split('\n');
                if let Some(first) = parts.next() {
                    line.push_str(first);
                }
                for part in parts {
                    lines.push(std::mem::take(&mut line));
                    line.push_str(part);
                }
            }
            Node::Element(el) if starts_line(el.name()) => {
                lines.push(std::mem::take(&mut line));
            }
            _ => {}
        }
    }
    lines.push(line);
    lines
        .iter()
        .map(|line| normalize(line))
        .filter(|line| !line.is_empty())
        .collect()
}

fn starts_line(name: &str) -> bool {
    matches!(
        name,
        "br" | "p" | "div" | "li" | "tr" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

/// The text of the first match of `selector` inside `element`, if any.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(inner_text)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_inner_lines_splits_on_br_and_newlines() {
        let doc = Html::parse_fragment("<p>Ma 19.10.<br>Kalakeitto\n  Ruisleipä<br> <br>Puuro</p>");
        let p = doc.select(&Selector::parse("p").unwrap()).next().unwrap();
        assert_eq!(
            inner_lines(p),
            vec!["Ma 19.10.", "Kalakeitto", "Ruisleipä", "Puuro"]
        );
    }

    #[test]
    fn test_inner_lines_keeps_inline_markup_together() {
        let doc = Html::parse_fragment(
            "<p>Tiistai 20.10.<br>Lohta <em>(L, G)</em><br>Kalaa <strong>ja</strong> perunaa</p>",
        );
        let p = doc.select(&Selector::parse("p").unwrap()).next().unwrap();
        assert_eq!(
            inner_lines(p),
            vec!["Tiistai 20.10.", "Lohta (L, G)", "Kalaa ja perunaa"]
        );
    }

    #[test]
    fn test_inner_lines_splits_paragraphs() {
        let doc = Html::parse_fragment("<div><p>Ma: Keitto</p><p>Ti: Pasta</p></div>");
        let div = doc.select(&Selector::parse("div").unwrap()).next().unwrap();
        assert_eq!(inner_lines(div), vec!["Ma: Keitto", "Ti: Pasta"]);
    }

    #[test]
    fn test_inner_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<div> <b>Lasagne</b>\n<i>(L)</i> </div>");
        let div = doc.select(&Selector::parse("div").unwrap()).next().unwrap();
        assert_eq!(inner_text(div), "Lasagne (L)");
    }

    #[test]
    fn test_select_anchor_missing() {
        let doc = Html::parse_fragment("<div></div>");
        let err = select_anchor(&Selector::parse("table").unwrap(), doc.root_element(), "table")
            .unwrap_err();
        assert!(matches!(err, Error::HtmlParse(_)));
    }
}
