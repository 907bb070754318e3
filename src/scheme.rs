//! Date-partitioned path derivation.
//!
//! Pure path composition from a captured instant — no I/O happens here.
//! The three-level `year/month/day` hierarchy defined in this module is the
//! single source of truth for both the live-write layout and the mirrored
//! archive layout:
//!
//! - Live logs: `<base>/<YYYY>/<Mon>/<DD>/log_<HH-MM-SS>.txt`
//! - Archived logs: `<base>/Archive/<YYYY>/<Mon>/<DD>/log_<HH-MM-SS>.txt`
//!
//! Callers capture one instant per operation and pass it to every function
//! involved, so a midnight or year rollover can never split a single path
//! across two dates.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{LogtrailError, Result};

/// Default base directory when none is supplied.
pub const DEFAULT_BASE: &str = "Logs";

/// Name of the archive root inserted between the base and the date partition.
pub const ARCHIVE_DIR: &str = "Archive";

/// Partition folder for an instant: `base/<year>/<month-abbrev>/<day>`.
///
/// Year is 4 digits, month is the 3-letter English abbreviation, day is
/// zero-padded to 2 digits. The folder is not created; callers own I/O.
pub fn partition_folder(base: &Path, instant: NaiveDateTime) -> PathBuf {
    base.join(instant.format("%Y").to_string())
        .join(instant.format("%b").to_string())
        .join(instant.format("%d").to_string())
}

/// Log file name for an instant: `log_<HH-MM-SS>.txt`.
///
/// 24-hour clock, zero-padded, hyphen-joined. Two calls within the same
/// second yield the same name; append-mode open means such a collision
/// interleaves into one file rather than erroring.
pub fn file_name(instant: NaiveDateTime) -> String {
    format!("log_{}.txt", instant.format("%H-%M-%S"))
}

/// Timestamp prefix for an entry line: `HH:MM:SS` (colon-joined, unlike the
/// hyphen-joined file-name form).
pub fn entry_timestamp(instant: NaiveDateTime) -> String {
    instant.format("%H:%M:%S").to_string()
}

/// Mirror a partitioned file path into the archive tree.
///
/// Given `base/Y/M/D/filename`, returns `base/Archive/Y/M/D/filename`. The
/// trailing `year/month/day/filename` segments are preserved verbatim; only
/// the root gains the `Archive` component. Errors with
/// [`LogtrailError::ShallowArchivePath`] if the path does not have three
/// named ancestor directories above the file.
pub fn archive_path(original: &Path) -> Result<PathBuf> {
    let shallow = || LogtrailError::ShallowArchivePath {
        path: original.to_path_buf(),
    };

    let file = original.file_name().ok_or_else(shallow)?;
    let day_dir = original.parent().ok_or_else(shallow)?;
    let month_dir = day_dir.parent().ok_or_else(shallow)?;
    let year_dir = month_dir.parent().ok_or_else(shallow)?;

    let day = day_dir.file_name().ok_or_else(shallow)?;
    let month = month_dir.file_name().ok_or_else(shallow)?;
    let year = year_dir.file_name().ok_or_else(shallow)?;

    let base = year_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    Ok(base
        .join(ARCHIVE_DIR)
        .join(year)
        .join(month)
        .join(day)
        .join(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn partition_folder_decomposes_into_year_month_day() {
        let folder = partition_folder(Path::new("Logs"), instant(2025, 10, 28, 10, 15, 30));
        assert_eq!(folder, PathBuf::from("Logs/2025/Oct/28"));
    }

    #[test]
    fn partition_folder_zero_pads_day() {
        let folder = partition_folder(Path::new("Logs"), instant(2025, 1, 5, 0, 0, 0));
        assert_eq!(folder, PathBuf::from("Logs/2025/Jan/05"));
    }

    #[test]
    fn partition_folder_respects_base() {
        let folder = partition_folder(Path::new("Logs/AGV"), instant(2025, 10, 28, 10, 15, 30));
        assert_eq!(folder, PathBuf::from("Logs/AGV/2025/Oct/28"));
    }

    #[test]
    fn file_name_is_hyphen_joined_and_zero_padded() {
        assert_eq!(file_name(instant(2025, 10, 28, 9, 5, 7)), "log_09-05-07.txt");
        assert_eq!(
            file_name(instant(2025, 10, 28, 23, 59, 59)),
            "log_23-59-59.txt"
        );
    }

    #[test]
    fn file_name_uses_24_hour_clock() {
        assert_eq!(
            file_name(instant(2025, 10, 28, 13, 0, 0)),
            "log_13-00-00.txt"
        );
    }

    #[test]
    fn entry_timestamp_is_colon_joined() {
        assert_eq!(entry_timestamp(instant(2025, 10, 28, 10, 15, 30)), "10:15:30");
        assert_eq!(entry_timestamp(instant(2025, 10, 28, 1, 2, 3)), "01:02:03");
    }

    #[test]
    fn archive_path_inserts_archive_root() {
        let archived = archive_path(Path::new("Logs/2025/Oct/28/log_10-15-30.txt")).unwrap();
        assert_eq!(
            archived,
            PathBuf::from("Logs/Archive/2025/Oct/28/log_10-15-30.txt")
        );
    }

    #[test]
    fn archive_path_preserves_date_suffix_under_nested_base() {
        let archived = archive_path(Path::new("var/data/Logs/2025/Oct/28/log_10-15-30.txt"))
            .unwrap();
        assert_eq!(
            archived,
            PathBuf::from("var/data/Logs/Archive/2025/Oct/28/log_10-15-30.txt")
        );
    }

    #[test]
    fn archive_path_allows_bare_date_partition() {
        // Exactly three ancestors and no base is still a valid partition.
        let archived = archive_path(Path::new("2025/Oct/28/log_10-15-30.txt")).unwrap();
        assert_eq!(
            archived,
            PathBuf::from("Archive/2025/Oct/28/log_10-15-30.txt")
        );
    }

    #[test]
    fn archive_path_rejects_shallow_paths() {
        for p in ["log.txt", "28/log.txt", "Oct/28/log.txt"] {
            let err = archive_path(Path::new(p)).unwrap_err();
            assert!(
                matches!(err, LogtrailError::ShallowArchivePath { .. }),
                "expected shallow-path error for {p}"
            );
        }
    }

    #[test]
    fn archive_then_live_paths_share_trailing_segments() {
        let original = partition_folder(Path::new("Logs"), instant(2025, 10, 28, 10, 15, 30))
            .join(file_name(instant(2025, 10, 28, 10, 15, 30)));
        let archived = archive_path(&original).unwrap();

        let tail = |p: &Path| {
            p.components()
                .rev()
                .take(4)
                .map(|c| c.as_os_str().to_os_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(tail(&original), tail(&archived));
    }
}
