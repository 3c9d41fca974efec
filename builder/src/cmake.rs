use std::path::Path;

use log::debug;

use fetchbuild_shared::config::TOOL_CONFIGURE;

use crate::error::BuildResult;
use crate::util::process::Runner;
use crate::util::scratch::path_str;

/// Marker separating definitions in the raw argument string
static DEFINE: &str = "-D";

/// Recover individual `-D` definitions from a loosely formatted string
///
/// The raw string is split on every literal `-D`; each fragment is trimmed,
/// empty fragments are dropped and the rest are re-prefixed with `-D`.
pub fn split_definitions(raw: &str) -> Vec<String> {
    raw.split(DEFINE)
        .map(|frag| frag.trim())
        .filter(|frag| !frag.is_empty())
        .map(|frag| format!("{}{}", DEFINE, frag))
        .collect()
}

/// Assemble the full configure argument list
pub fn configure_args(
    raw: &str,
    path_src: &Path,
    path_build: &Path,
    path_install: &Path,
) -> BuildResult<Vec<String>> {
    let mut args = split_definitions(raw);
    args.push(format!("-H{}", path_str(path_src)?));
    args.push(format!("-B{}", path_str(path_build)?));
    args.push(format!("-DCMAKE_INSTALL_PREFIX={}", path_str(path_install)?));
    Ok(args)
}

/// Run the configure step
pub fn run_configure<R: Runner>(
    runner: &R,
    raw: &str,
    path_src: &Path,
    path_build: &Path,
    path_install: &Path,
) -> BuildResult<()> {
    debug!(
        "configure: args={}, src={}, build={}, install={}",
        raw,
        path_src.display(),
        path_build.display(),
        path_install.display()
    );
    let args = configure_args(raw, path_src, path_build, path_install)?;
    runner.exec(TOOL_CONFIGURE, &args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_well_formed() {
        assert_eq!(
            split_definitions("-DFOO=1 -DBAR=2"),
            vec!["-DFOO=1", "-DBAR=2"]
        );
    }

    #[test]
    fn split_tolerates_stray_whitespace() {
        assert_eq!(
            split_definitions("  -DFOO=1    -D BAR=2\n-DBAZ=ON  "),
            vec!["-DFOO=1", "-DBAR=2", "-DBAZ=ON"]
        );
        assert_eq!(split_definitions("-DA=1-DB=2"), vec!["-DA=1", "-DB=2"]);
    }

    #[test]
    fn split_drops_empty_fragments() {
        assert!(split_definitions("").is_empty());
        assert!(split_definitions("   ").is_empty());
        assert!(split_definitions("-D-D -D").is_empty());
        assert_eq!(split_definitions("-D-DX=1"), vec!["-DX=1"]);
    }

    #[test]
    fn split_reprefixes_leading_fragment() {
        // text before the first marker is kept as its own definition
        assert_eq!(
            split_definitions("CMAKE_BUILD_TYPE=Release -DFOO=1"),
            vec!["-DCMAKE_BUILD_TYPE=Release", "-DFOO=1"]
        );
    }

    #[test]
    fn split_keeps_inner_spaces() {
        assert_eq!(
            split_definitions("-DCMAKE_C_FLAGS=-O2 -g"),
            vec!["-DCMAKE_C_FLAGS=-O2 -g"]
        );
    }

    #[test]
    fn directories_are_appended_in_order() {
        let args = configure_args(
            "-DFOO=1",
            Path::new("/e/1.0.0"),
            Path::new("/e/build-x"),
            Path::new("/e/install-y"),
        )
        .unwrap();
        assert_eq!(
            args,
            vec![
                "-DFOO=1",
                "-H/e/1.0.0",
                "-B/e/build-x",
                "-DCMAKE_INSTALL_PREFIX=/e/install-y",
            ]
        );
    }

    #[test]
    fn directories_only_when_no_definitions() {
        let args = configure_args("", Path::new("/s"), Path::new("/b"), Path::new("/i")).unwrap();
        assert_eq!(args, vec!["-H/s", "-B/b", "-DCMAKE_INSTALL_PREFIX=/i"]);
    }
}
