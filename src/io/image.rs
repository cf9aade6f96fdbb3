//! PNG preview export and the file-backed session viewer

use crate::channel::buffer::{ColorBuffer, read_pixel};
use crate::io::configuration::PREVIEW_SUFFIX;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::session::machine::{Notice, Viewer};
use image::imageops::{FilterType, resize};
use image::{Rgb, RgbImage};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Convert a color buffer into an RGB image at its native size
///
/// Planes are stored in blue, green, red order, so plane 2 becomes the red
/// channel and plane 0 the blue one. The R table therefore previews red.
///
/// # Errors
///
/// Returns an error if the buffer does not have exactly three planes
pub fn buffer_to_image(buffer: &ColorBuffer) -> Result<RgbImage> {
    let (rows, cols, planes) = buffer.dim();
    if planes != 3 {
        return Err(invalid_parameter(
            "buffer",
            &format!("{rows}x{cols}x{planes}"),
            &"expected three color planes",
        ));
    }

    Ok(RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let [blue, green, red] =
            read_pixel(buffer, y as usize, x as usize).unwrap_or([0, 0, 0]);
        Rgb([red, green, blue])
    }))
}

/// Export a buffer as a square PNG preview
///
/// The image is enlarged with nearest-neighbour sampling so each grid cell
/// stays a crisp block.
///
/// # Errors
///
/// Returns an error if:
/// - `size` is zero
/// - The buffer does not have three planes
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(buffer: &ColorBuffer, output_path: &Path, size: u32) -> Result<()> {
    if size == 0 {
        return Err(invalid_parameter(
            "preview_size",
            &size,
            &"must be at least one pixel",
        ));
    }

    let preview = resize(&buffer_to_image(buffer)?, size, size, FilterType::Nearest);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    preview
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Viewer that writes every shown buffer to a PNG and prints notices
pub struct PreviewViewer<W> {
    output_dir: PathBuf,
    preview_size: u32,
    writer: W,
    report_paths: bool,
    exported: Vec<PathBuf>,
}

impl<W: Write> PreviewViewer<W> {
    /// Create a viewer exporting into `output_dir`
    ///
    /// Notices are always written. Each exported path is also reported when
    /// `report_paths` is set.
    pub const fn new(
        output_dir: PathBuf,
        preview_size: u32,
        writer: W,
        report_paths: bool,
    ) -> Self {
        Self {
            output_dir,
            preview_size,
            writer,
            report_paths,
            exported: Vec::new(),
        }
    }

    /// Path a preview with the given name is written to
    pub fn preview_path(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{PREVIEW_SUFFIX}.png", name.to_lowercase()))
    }

    /// Whether exported paths are reported to the writer
    pub const fn reports_paths(&self) -> bool {
        self.report_paths
    }

    /// Files written so far, in export order
    pub fn exported(&self) -> &[PathBuf] {
        &self.exported
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").map_err(|source| PuzzleError::Terminal {
            operation: "write notice",
            source,
        })
    }
}

impl<W: Write> Viewer for PreviewViewer<W> {
    fn show(&mut self, name: &str, image: &ColorBuffer) -> Result<()> {
        let path = self.preview_path(name);
        export_preview(image, &path, self.preview_size)?;

        if self.report_paths {
            self.write_line(&format!("{name} Phase -> {}", path.display()))?;
        }
        self.exported.push(path);
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        self.write_line(&notice.to_string())
    }
}
