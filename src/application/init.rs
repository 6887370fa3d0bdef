//! Config scaffolding
//!
//! Renders a commented `.shapesync.toml` and writes it atomically.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::PairConfig;
use crate::error::{ShapesyncError, ShapesyncResult};

const HEADER: &str = "\
# shapesync configuration
#
# Each [[pairs]] entry names backend model files and the frontend interface
# files checked against them. Paths are relative to this file.

[check]
# Report backend models that no frontend interface is checked against.
backend_orphans = false
# Compare backend snake_case fields as camelCase.
camel_case_backend = true
# Comment marker for ignore directives, e.g. `// shapesync: ignore field date`.
marker = \"shapesync\"
";

const NAMES: &str = "
[names]
# Types that are deliberately not checked.
exclude = []

[names.map]
# Frontend interface = [backend models it mirrors]
# EventExtended = [\"EventModel\"]
";

const EXAMPLE_PAIR: &str = "
# [[pairs]]
# name = \"events\"
# backend = \"backend/models.py\"
# frontend = \"frontend/types/events.ts\"
";

/// Render the config file, with `pairs` filled in or an example pair commented out
pub fn render_config(pairs: &[PairConfig]) -> String {
    let mut out = String::from(HEADER);

    if pairs.is_empty() {
        out.push_str(EXAMPLE_PAIR);
    }
    for pair in pairs {
        out.push_str("\n[[pairs]]\n");
        out.push_str(&format!("name = {}\n", quote(&pair.name)));
        out.push_str(&format!("backend = {}\n", path_list(&pair.backend)));
        out.push_str(&format!("frontend = {}\n", path_list(&pair.frontend)));
    }

    out.push_str(NAMES);
    out
}

fn quote(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

fn path_list(paths: &[std::path::PathBuf]) -> String {
    let quoted: Vec<String> = paths
        .iter()
        .map(|p| quote(&p.to_string_lossy()))
        .collect();
    match quoted.as_slice() {
        [one] => one.clone(),
        _ => format!("[{}]", quoted.join(", ")),
    }
}

/// Write `contents` to `path` via a temp file and rename.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_config(path: &Path, contents: &str, force: bool) -> ShapesyncResult<()> {
    if path.exists() && !force {
        return Err(ShapesyncError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), "wrote config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn template_parses_as_default_config() {
        let rendered = render_config(&[]);
        let config: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rendered_pairs_round_trip() {
        let pairs = vec![PairConfig {
            name: "events".to_string(),
            backend: vec![PathBuf::from("backend/models.py")],
            frontend: vec![
                PathBuf::from("frontend/a.ts"),
                PathBuf::from("frontend/b.ts"),
            ],
        }];

        let config: Config = toml::from_str(&render_config(&pairs)).unwrap();

        assert_eq!(config.pairs, pairs);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".shapesync.toml");
        std::fs::write(&path, "old").unwrap();

        let err = write_config(&path, "new", false).unwrap_err();
        assert!(matches!(err, ShapesyncError::ConfigExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");

        write_config(&path, "new", true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
