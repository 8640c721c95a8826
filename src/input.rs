// Domain list input - newline-delimited domain names

use crate::error::WatchError;
use crate::Result;
use std::fs;
use std::path::Path;

/// Read the domain list from `path`.
///
/// A missing file is the one fatal error in a run and surfaces before any
/// output file is touched. Lines are trimmed; blank lines and `#` comments
/// are dropped, everything else is passed to the resolver in file order.
pub fn load_domains<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(WatchError::DomainFileMissing {
            path: path.to_path_buf(),
        }
        .into());
    }

    let contents = fs::read_to_string(path).map_err(|source| WatchError::FileSystem {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_an_error() {
        let result = load_domains("definitely/not/there.txt");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WatchError>(),
            Some(WatchError::DomainFileMissing { .. })
        ));
    }

    #[test]
    fn loads_trimmed_lines_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  cdn.example.com  \napi.example.com\nedge.example.net").unwrap();

        let domains = load_domains(file.path()).unwrap();
        assert_eq!(
            domains,
            vec!["cdn.example.com", "api.example.com", "edge.example.net"]
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# edge pool\ncdn.example.com\n\n   \napi.example.com\n").unwrap();

        let domains = load_domains(file.path()).unwrap();
        assert_eq!(domains, vec!["cdn.example.com", "api.example.com"]);
    }

    #[test]
    fn empty_file_yields_no_domains() {
        let file = NamedTempFile::new().unwrap();
        let domains = load_domains(file.path()).unwrap();
        assert!(domains.is_empty());
    }
}
