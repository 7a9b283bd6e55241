//! Parse and load tooltip configuration files.

use std::{ffi::OsStr, fs, path::Path};

use ron::{Options, extensions::Extensions};
use tracing::debug;

use crate::{Error, Result, RawTooltip, TooltipConfig, error::excerpt_at};

/// Split a RON error rendering (`line:col: message` or `l:c-l:c: message`).
fn split_location(rendered: &str) -> Option<(usize, usize, String)> {
    let (loc, message) = rendered.split_once(": ")?;
    let start = loc.split('-').next()?;
    let (line, col) = start.split_once(':')?;
    Some((
        line.trim().parse().ok()?,
        col.trim().parse().ok()?,
        message.to_string(),
    ))
}

/// Parse RON `source` into a raw overlay. `path` is only used in error messages.
pub fn parse_str(source: &str, path: Option<&Path>) -> Result<RawTooltip> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    options.from_str::<RawTooltip>(source).map_err(|e| {
        let rendered = e.to_string();
        let (line, col, message) = split_location(&rendered).unwrap_or((1, 1, rendered));
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message,
            excerpt: excerpt_at(source, line, col),
        }
    })
}

/// Load a raw overlay from a `.ron` file at `path`.
pub fn load_from_path(path: &Path) -> Result<RawTooltip> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported config format (expected a .ron file)".to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "config_loaded");
    parse_str(&source, Some(path))
}

/// Load `path` and apply it on top of the defaults.
pub fn load_config(path: &Path) -> Result<TooltipConfig> {
    load_from_path(path)?.overlay(&TooltipConfig::default())
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn implicit_some_allows_bare_values() {
        let raw = parse_str("(show_delay: 250, widget_anchor: \"se\")", None).unwrap();
        assert_eq!(raw.show_delay, Some(250));
        assert_eq!(raw.widget_anchor.as_deref(), Some("se"));
    }

    #[test]
    fn unknown_field_reports_location() {
        let src = "(\n  show_delay: 10,\n  bogus: 1,\n)";
        match parse_str(src, None) {
            Err(Error::Parse { line, excerpt, .. }) => {
                assert_eq!(line, 3);
                assert!(excerpt.contains('^'));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_ron_extension() {
        let err = load_from_path(Path::new("tooltip.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn loads_and_validates_file() {
        let dir = env::temp_dir().join(format!("tipkit-config-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.ron");
        fs::write(&good, "(opacity: 0.8, animation: slide, bg: \"red\")").unwrap();
        let config = load_config(&good).unwrap();
        assert_eq!(config.opacity, 0.8);

        let bad = dir.join("bad.ron");
        fs::write(&bad, "(opacity: 2.0)").unwrap();
        assert!(matches!(load_config(&bad), Err(Error::Validation { .. })));

        let missing = dir.join("missing.ron");
        assert!(matches!(load_from_path(&missing), Err(Error::Read { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn location_parsing_handles_spans() {
        assert_eq!(
            split_location("3:5: Unexpected token"),
            Some((3, 5, "Unexpected token".to_string()))
        );
        assert_eq!(
            split_location("2:1-2:9: Unknown field"),
            Some((2, 1, "Unknown field".to_string()))
        );
        assert_eq!(split_location("no location"), None);
    }
}
