//! Local time formatting.

use chrono::Local;

/// Formats the current local time according to the specified format string.
///
/// The format string follows the same syntax as `chrono::format::strftime`.
///
/// # Arguments
///
/// * `format` - The format string (e.g., "%Y-%m-%d %H:%M:%S")
///
/// # Returns
///
/// Returns the formatted time string.
///
/// # Examples
///
/// ```
/// use cutil::time::local_now;
///
/// let formatted = local_now("%Y-%m-%d %H:%M:%S");
/// println!("Current time: {}", formatted);
/// ```
pub fn local_now(format: &str) -> String {
    Local::now().format(format).to_string()
}

/// Current local time as a file-name friendly stamp, `YYYYmmdd_HHMMSS`.
///
/// # Examples
///
/// ```
/// use cutil::time::file_stamp;
///
/// let stamp = file_stamp();
/// assert_eq!(stamp.len(), 15);
/// assert_eq!(&stamp[8..9], "_");
/// ```
pub fn file_stamp() -> String {
    local_now("%Y%m%d_%H%M%S")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_now() {
        let year = local_now("%Y");
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_file_stamp() {
        let stamp = file_stamp();
        let (date, time) = stamp.split_once('_').unwrap();

        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().chain(time.chars()).all(|c| c.is_ascii_digit()));
    }
}
