//! Eligible input extensions and output naming

use std::path::{Path, PathBuf};

use crate::config::OutputFormat;

/// Extensions accepted as input (compared case-insensitively)
pub fn supported_input_formats() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "tif"]
}

/// Check if a file extension is supported for input
pub fn is_supported_input_format(extension: &str) -> bool {
    supported_input_formats()
        .iter()
        .any(|&fmt| fmt.eq_ignore_ascii_case(extension))
}

/// Whether `path` names an eligible image: its file name ends in `.<ext>`
/// for a supported extension. A bare `.png` counts.
pub fn has_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    let Some(name) = path.as_ref().file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    supported_input_formats()
        .iter()
        .any(|&ext| name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
}

/// Output path for `input`: `<output_dir>/<stem>.<format extension>`, where the
/// stem drops only the last extension (`scan.v2.tif` keeps `scan.v2`).
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(format.extension());
    output_dir.join(name)
}

/// Guess the decoder from the file extension
pub fn input_codec_from_path<P: AsRef<Path>>(path: P) -> Option<image::ImageFormat> {
    image::ImageFormat::from_path(path).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_formats() {
        assert!(is_supported_input_format("jpg"));
        assert!(is_supported_input_format("PNG"));
        assert!(is_supported_input_format("TiF"));
        assert!(!is_supported_input_format("webp"));
        assert!(!is_supported_input_format("txt"));
    }

    #[test]
    fn test_extension_check() {
        assert!(has_supported_extension("a.png"));
        assert!(has_supported_extension("/x/c.JPG"));
        assert!(has_supported_extension("scan.final.tiff"));
        assert!(!has_supported_extension("b.txt"));
        assert!(!has_supported_extension("png"));
        assert!(!has_supported_extension("archive.png.zip"));
        assert!(!has_supported_extension("notpng"));
    }

    #[test]
    fn test_dotfile_with_image_extension_is_eligible() {
        assert!(has_supported_extension("/in/.png"));
        assert!(has_supported_extension(".JPEG"));
        assert_eq!(
            output_path_for(Path::new("/in/.png"), Path::new("/in/resized"), OutputFormat::Png),
            PathBuf::from("/in/resized/.png.png")
        );
    }

    #[test]
    fn test_multi_dot_names_stay_distinct() {
        let out = Path::new("/in/resized");
        let first = output_path_for(Path::new("/in/photo.1.png"), out, OutputFormat::Gif);
        let second = output_path_for(Path::new("/in/photo.2.png"), out, OutputFormat::Gif);

        assert_eq!(first, PathBuf::from("/in/resized/photo.1.gif"));
        assert_eq!(second, PathBuf::from("/in/resized/photo.2.gif"));
    }

    #[test]
    fn test_output_path_uses_lowercase_target_extension() {
        let out = Path::new("/in/resized");

        assert_eq!(
            output_path_for(Path::new("/in/c.JPG"), out, OutputFormat::Png),
            PathBuf::from("/in/resized/c.png")
        );
        assert_eq!(
            output_path_for(Path::new("/in/a.png"), out, OutputFormat::Jpeg),
            PathBuf::from("/in/resized/a.jpeg")
        );
        assert_eq!(
            output_path_for(Path::new("/in/scan.v2.TIF"), out, OutputFormat::Tiff),
            PathBuf::from("/in/resized/scan.v2.tiff")
        );
    }

    #[test]
    fn test_input_codec_guess() {
        assert_eq!(
            input_codec_from_path("photo.JPEG"),
            Some(image::ImageFormat::Jpeg)
        );
        assert_eq!(input_codec_from_path("x.tif"), Some(image::ImageFormat::Tiff));
        assert_eq!(input_codec_from_path("x.txt"), None);
    }
}
