use scraper::Selector;

/// Compiles a selector written into the source. A typo there is a bug, not
/// bad input, so it panics on first use.
pub fn compile(selector: &str) -> Selector {
    match Selector::parse(selector) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {selector}: {e:?}"),
    }
}

/// `static_selector!(NAME <- "css")` declares a `static NAME` selector that is
/// compiled the first time it is dereferenced.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| $crate::parse::static_selector::compile($sel));
    };
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    #[test]
    fn test_selector_is_reused() {
        static_selector!(CELL <- "td.dish");
        let doc = Html::parse_fragment("<table><tr><td class=dish>a</td><td>b</td></tr></table>");
        assert_eq!(doc.select(&CELL).count(), 1);
        assert_eq!(doc.select(&CELL).count(), 1);
    }

    #[test]
    #[should_panic(expected = "Error parsing static selector")]
    fn test_bad_selector_panics() {
        static_selector!(BROKEN <- "td..dish");
        let _ = &*BROKEN;
    }
}
