//! Defense against bidirectional-control filename spoofing
//!
//! A name like `invoice\u{202E}fdp.exe` renders with its true extension
//! visually disguised: the right-to-left override flips everything after it,
//! so the name reads as ending in `.pdf`. Display layers pass names through
//! [`sanitize_for_bidi_characters`] so the extension always renders as a
//! distinct left-to-right token, whatever controls are embedded in the base
//! name.
//!
//! This is purely a display transform. It is independent of any server
//! policy and never alters the name stored on the server.

/// First-strong-isolate open is not needed; the extension is wrapped in a
/// left-to-right isolate so it renders LTR regardless of context.
const LRI: char = '\u{2066}';
/// Pop directional isolate, closing the wrap.
const PDI: char = '\u{2069}';

/// Bidirectional control scalars abused in extension-spoofing attacks:
/// embeddings/overrides (U+202A..U+202E), isolates (U+2066..U+2069),
/// directional marks (U+200E, U+200F) and the Arabic letter mark (U+061C).
fn is_spoofing_control(c: char) -> bool {
    matches!(
        c,
        '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{200E}' | '\u{200F}' | '\u{061C}'
    )
}

/// Rewrite `name` for safe display.
///
/// Folders carry no extension and are returned unchanged, as are names
/// without a dot. Otherwise the name is split at the last dot; when the
/// base contains no dangerous control the parts are rejoined in display
/// order (`base.ext`, or extension-first for right-to-left locales). When
/// the base does contain one, the extension is wrapped in directional
/// isolates so embedded overrides cannot reorder it.
pub fn sanitize_for_bidi_characters(name: &str, is_folder: bool, is_rtl: bool) -> String {
    if is_folder {
        return name.to_string();
    }

    let Some(pos) = name.rfind('.') else {
        return name.to_string();
    };
    let (base, ext) = (&name[..pos], &name[pos + 1..]);

    if !base.chars().any(is_spoofing_control) {
        return if is_rtl {
            format!(".{ext}{base}")
        } else {
            format!("{base}.{ext}")
        };
    }

    if is_rtl {
        format!("{LRI}.{ext}{PDI}{base}")
    } else {
        format!("{base}{LRI}.{ext}{PDI}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_passes_through() {
        assert_eq!(
            sanitize_for_bidi_characters("invoice.pdf", false, false),
            "invoice.pdf"
        );
    }

    #[test]
    fn test_no_extension_passes_through() {
        assert_eq!(sanitize_for_bidi_characters("README", false, false), "README");
        assert_eq!(sanitize_for_bidi_characters("README", false, true), "README");
    }

    #[test]
    fn test_folder_passes_through() {
        assert_eq!(
            sanitize_for_bidi_characters("inv\u{202E}oice.d", true, false),
            "inv\u{202E}oice.d"
        );
    }

    #[test]
    fn test_clean_name_rtl_puts_extension_first() {
        assert_eq!(
            sanitize_for_bidi_characters("invoice.pdf", false, true),
            ".pdfinvoice"
        );
    }

    #[test]
    fn test_rlo_in_base_isolates_extension() {
        let out = sanitize_for_bidi_characters("invoice\u{202E}fdp.exe", false, false);
        assert_eq!(out, "invoice\u{202E}fdp\u{2066}.exe\u{2069}");
        // The override never sits adjacent to the rendered extension: the
        // isolate opener intervenes.
        let ext_at = out.find(".exe").unwrap();
        assert_eq!(out[..ext_at].chars().last(), Some('\u{2066}'));
    }

    #[test]
    fn test_rlo_in_base_rtl_orders_extension_first() {
        let out = sanitize_for_bidi_characters("invoice\u{202E}fdp.exe", false, true);
        assert_eq!(out, "\u{2066}.exe\u{2069}invoice\u{202E}fdp");
    }

    #[test]
    fn test_all_control_families_detected() {
        for c in ['\u{202A}', '\u{202D}', '\u{2066}', '\u{2069}', '\u{200E}', '\u{200F}', '\u{061C}']
        {
            let name = format!("a{c}b.txt");
            let out = sanitize_for_bidi_characters(&name, false, false);
            assert!(out.ends_with(&format!("{LRI}.txt{PDI}")), "for control {c:?}");
        }
    }

    #[test]
    fn test_control_in_extension_only_is_left_alone() {
        // Only the base is scanned; a control after the dot cannot disguise
        // the extension's position.
        let out = sanitize_for_bidi_characters("file.t\u{200E}xt", false, false);
        assert_eq!(out, "file.t\u{200E}xt");
    }
}
