//! Input file handling
//!
//! Reads the "top PyPI packages" JSON dump, which lists packages in
//! decreasing order of monthly download count:
//! <https://hugovk.github.io/top-pypi-packages/>

use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde::Deserialize;
use std::fs;

/// One input record: a package and its fixed, externally-sourced download count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub name: String,
    pub downloads: u64,
}

#[derive(Debug, Deserialize)]
struct TopPackagesFile {
    rows: Vec<TopPackagesRow>,
}

#[derive(Debug, Deserialize)]
struct TopPackagesRow {
    project: String,
    download_count: u64,
}

/// Load the input dump, preserving its ordering.
pub fn load_packages(path: &Utf8Path) -> Result<Vec<PackageRef>> {
    let contents = fs::read_to_string(path).into_app_err_with(|| format!("reading top packages file '{path}'"))?;

    let file: TopPackagesFile =
        serde_json::from_str(&contents).into_app_err_with(|| format!("parsing top packages file '{path}'"))?;

    Ok(file
        .rows
        .into_iter()
        .map(|row| PackageRef {
            name: row.project,
            downloads: row.download_count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_packages_preserves_order() {
        let file = write_temp(
            r#"{"rows": [
                {"project": "boto3", "download_count": 500},
                {"project": "urllib3", "download_count": 400},
                {"project": "requests", "download_count": 300}
            ]}"#,
        );

        let packages = load_packages(Utf8Path::new(file.path().to_str().unwrap())).unwrap();

        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].name, "boto3");
        assert_eq!(packages[0].downloads, 500);
        assert_eq!(packages[2].name, "requests");
    }

    #[test]
    fn test_load_packages_ignores_unknown_fields() {
        let file = write_temp(
            r#"{"last_update": "2024-01-01", "rows": [
                {"project": "flask", "download_count": 100, "extra": true}
            ]}"#,
        );

        let packages = load_packages(Utf8Path::new(file.path().to_str().unwrap())).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "flask");
    }

    #[test]
    fn test_load_packages_missing_file() {
        let _ = load_packages(Utf8Path::new("/nonexistent/top.json")).unwrap_err();
    }

    #[test]
    fn test_load_packages_malformed_json() {
        let file = write_temp("{not json");
        let _ = load_packages(Utf8Path::new(file.path().to_str().unwrap())).unwrap_err();
    }

    #[test]
    fn test_load_packages_empty_rows() {
        let file = write_temp(r#"{"rows": []}"#);
        let packages = load_packages(Utf8Path::new(file.path().to_str().unwrap())).unwrap();
        assert!(packages.is_empty());
    }
}
