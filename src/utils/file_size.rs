pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Sizes on the intake card are always kibibytes with two decimals,
    /// matching the web UI ("0.50 KB" for 512 bytes rather than "512 B").
    pub fn format_kb(size_bytes: u64) -> String {
        format!("{:.2} KB", size_bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_kilobytes() {
        assert_eq!(FileSizeUtils::format_kb(1024), "1.00 KB");
        assert_eq!(FileSizeUtils::format_kb(2048), "2.00 KB");
    }

    #[test]
    fn stays_in_kilobytes_below_one() {
        assert_eq!(FileSizeUtils::format_kb(512), "0.50 KB");
        assert_eq!(FileSizeUtils::format_kb(0), "0.00 KB");
    }

    #[test]
    fn does_not_scale_to_larger_units() {
        assert_eq!(FileSizeUtils::format_kb(5 * 1024 * 1024), "5120.00 KB");
    }
}
