use std::ffi::OsStr;
use std::path::Path;

pub const HEADER_SLASH: &str = "\
// Copyright 2025 Lanka Data Foundation
// SPDX-License-Identifier: Apache-2.0

";

pub const HEADER_HASH: &str = "\
# Copyright 2025 Lanka Data Foundation
# SPDX-License-Identifier: Apache-2.0

";

const COPYRIGHT_MARKER: &str = "Copyright";
const LICENSE_MARKER: &str = "SPDX-License-Identifier";

/// Returns the header block for a file name, or `None` when the file is
/// not covered by any rule.
///
/// Exact file names take precedence over extension lookup.
#[must_use]
pub fn header_for(file_name: &str) -> Option<&'static str> {
    if file_name == "Dockerfile" {
        return Some(HEADER_HASH);
    }
    Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .and_then(extension_header)
}

fn extension_header(extension: &str) -> Option<&'static str> {
    match extension {
        "go" | "bal" | "proto" => Some(HEADER_SLASH),
        "py" | "sh" => Some(HEADER_HASH),
        _ => None,
    }
}

/// True when the content already carries both license markers, in any
/// order.
#[must_use]
pub fn has_license(content: &str) -> bool {
    content.contains(COPYRIGHT_MARKER) && content.contains(LICENSE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_extensions_get_the_slash_header() {
        for name in ["server.go", "service.bal", "api.proto"] {
            assert_eq!(header_for(name), Some(HEADER_SLASH), "{name}");
        }
    }

    #[test]
    fn hash_extensions_get_the_hash_header() {
        for name in ["verify.py", "deploy.sh"] {
            assert_eq!(header_for(name), Some(HEADER_HASH), "{name}");
        }
    }

    #[test]
    fn dockerfile_matches_by_exact_name() {
        assert_eq!(header_for("Dockerfile"), Some(HEADER_HASH));
    }

    #[test]
    fn uncovered_names_match_nothing() {
        for name in ["README.md", "Makefile", "notes", "main.rs"] {
            assert_eq!(header_for(name), None, "{name}");
        }
    }

    #[test]
    fn markers_are_detected_in_any_order() {
        assert!(has_license(
            "# SPDX-License-Identifier: MIT\n# Copyright 2020 Someone\n"
        ));
        assert!(has_license(HEADER_SLASH));
        assert!(!has_license("# Copyright 2020 Someone\n"));
        assert!(!has_license("fn main() {}\n"));
    }
}
