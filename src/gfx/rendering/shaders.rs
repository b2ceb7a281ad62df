//! WGSL sources for the two programs
//!
//! Sources are embedded at build time. A directory override swaps both for
//! files on disk, which is handy while tweaking the lighting.

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::error::{Result, ViewerError};

pub const PHONG_SHADER: &str = "phong";
pub const LIGHT_MARKER_SHADER: &str = "light_marker";

const PHONG_SOURCE: &str = include_str!("shaders/phong.wgsl");
const LIGHT_MARKER_SOURCE: &str = include_str!("shaders/light_marker.wgsl");

#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub phong: Cow<'static, str>,
    pub light_marker: Cow<'static, str>,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            phong: Cow::Borrowed(PHONG_SOURCE),
            light_marker: Cow::Borrowed(LIGHT_MARKER_SOURCE),
        }
    }
}

impl ShaderSources {
    /// Embedded sources, or `phong.wgsl` and `light_marker.wgsl` from `dir`
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = dir else {
            return Ok(Self::default());
        };

        info!("Loading shaders from {}", dir.display());
        Ok(Self {
            phong: Cow::Owned(read_source(&dir.join(format!("{PHONG_SHADER}.wgsl")))?),
            light_marker: Cow::Owned(read_source(
                &dir.join(format!("{LIGHT_MARKER_SHADER}.wgsl")),
            )?),
        })
    }

    /// Name and source of each program, in load order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            (PHONG_SHADER, self.phong.as_ref()),
            (LIGHT_MARKER_SHADER, self.light_marker.as_ref()),
        ]
        .into_iter()
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ViewerError::ShaderRead {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("workroom-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_embedded_sources_define_entry_points() {
        let sources = ShaderSources::load(None).expect("embedded sources");
        for (name, source) in sources.iter() {
            assert!(source.contains("fn vs_main"), "{name} has no vertex entry");
            assert!(source.contains("fn fs_main"), "{name} has no fragment entry");
            assert!(source.contains("struct Globals"), "{name} has no globals");
        }
    }

    #[test]
    fn test_phong_reads_every_shading_parameter() {
        let source = ShaderSources::default().phong;
        for field in [
            "light_position",
            "light_color",
            "view_position",
            "ambient_strength",
            "diffuse_strength",
            "specular_strength",
            "shininess",
        ] {
            assert!(source.contains(&format!("globals.{field}")), "{field} unused");
        }
    }

    #[test]
    fn test_override_directory() {
        let dir = scratch_dir("override");
        fs::write(dir.join("phong.wgsl"), "// phong").expect("write phong");
        fs::write(dir.join("light_marker.wgsl"), "// marker").expect("write marker");

        let sources = ShaderSources::load(Some(&dir)).expect("override sources");
        assert_eq!(sources.phong, "// phong");
        assert_eq!(sources.light_marker, "// marker");

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_override_is_an_error() {
        let dir = scratch_dir("missing");
        fs::write(dir.join("phong.wgsl"), "// phong").expect("write phong");

        match ShaderSources::load(Some(&dir)) {
            Err(ViewerError::ShaderRead { path, .. }) => {
                assert_eq!(path, dir.join("light_marker.wgsl"));
            }
            other => panic!("expected a read error, got {other:?}"),
        }

        fs::remove_dir_all(dir).ok();
    }
}
