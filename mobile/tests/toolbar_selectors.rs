#![cfg(test)]
/*!
Toolbar stylesheet lint for the mobile build.

Purpose:
- Ensure the CSS selectors the toolbar bridge components render against remain
  present in the shared stylesheet: ui/assets/styling/toolbar.css
- Fail fast if a refactor drops or renames a class, preventing a silent
  styling regression in packaged (embedded) builds.

How it works:
- We compile-time embed the stylesheet with `include_str!` pointing at the
  shared `ui/` location (mirrors the constant in the toolbar bridge).
- We assert presence of the selectors the bridge emits.
- If you intentionally rename a selector, update both the bridge markup and
  REQUIRED_SELECTORS here.
*/

const TOOLBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/toolbar.css"
));

/// Selectors the bridge components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Host bar
    ".router-toolbar {",
    ".router-toolbar--hidden",
    // Items
    ".router-toolbar__item {",
    ".router-toolbar__item--hidden",
    ".router-toolbar__spacer--fixed",
    ".router-toolbar__spacer--fluid",
    ".router-toolbar__button",
    ".router-toolbar__symbol",
    ".router-toolbar__title",
    ".router-toolbar__view",
    // Shared link menu
    ".link-menu {",
    ".link-menu__actions",
    ".link-menu__action",
    ".link-menu__action--destructive",
    ".link-menu__symbol",
    ".link-menu__title",
    // Responsive block sanity check
    "@media (max-width: 720px)",
];

#[test]
fn toolbar_css_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !TOOLBAR_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors in toolbar stylesheet:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn toolbar_css_not_trivially_empty() {
    let non_ws_len = TOOLBAR_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 1_000,
        "Embedded toolbar stylesheet appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or the path change?",
        non_ws_len
    );
}
