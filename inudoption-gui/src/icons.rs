//! Icons and portraits bundled into the binary.

use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");
static PORTRAITS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/portraits");

/// Shown in place of anything that can't be found.
const FALLBACK: &str = "paw";

pub fn icon(name: &str) -> Svg<'static> {
    svg(icon_handle(name))
}

pub fn icon_handle(name: &str) -> svg::Handle {
    let file = ICONS
        .get_file(format!("{name}.svg"))
        .or_else(|| ICONS.get_file(format!("{FALLBACK}.svg")));

    svg::Handle::from_memory(file.map(|f| f.contents()).unwrap_or_default())
}

/// Resolve a profile's image reference to its portrait.
pub fn portrait(image_ref: &str) -> svg::Handle {
    match PORTRAITS.get_file(format!("{image_ref}.svg")) {
        Some(file) => svg::Handle::from_memory(file.contents()),
        None => icon_handle(FALLBACK),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bundled_assets() {
        for name in ["info", "notifications", FALLBACK] {
            assert!(ICONS.get_file(format!("{name}.svg")).is_some(), "{name}");
        }

        assert!(PORTRAITS.get_file("michael.svg").is_some());
    }
}
