//! Tests for PNG preview export and the preview viewer

#[cfg(test)]
mod tests {
    use chromacube::channel::buffer::{ColorBuffer, blank_buffer, write_pixel};
    use chromacube::channel::face::Face;
    use chromacube::channel::permutation::PermutationTable;
    use chromacube::io::image::{PreviewViewer, buffer_to_image, export_preview};
    use chromacube::session::machine::{Notice, Viewer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests BGR planes are swapped into RGB channels at native size
    // Verified by copying planes into channels unchanged
    #[test]
    fn test_buffer_to_image_channel_order() {
        let mut buffer = blank_buffer();
        write_pixel(&mut buffer, 2, 5, [10, 20, 30]);

        let image = buffer_to_image(&buffer).expect("three planes");
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.get_pixel(5, 2).0, [30, 20, 10]);
        assert_eq!(image.get_pixel(2, 5).0, [0, 0, 0]);
    }

    // Tests each face table previews in its own color
    // Verified by exporting plane 0 as the red channel
    #[test]
    fn test_face_tables_render_in_their_color() {
        let mut rng = StdRng::seed_from_u64(8);
        for (face, channel) in [(Face::Red, 0), (Face::Green, 1), (Face::Blue, 2)] {
            let table = PermutationTable::generate(face, &mut rng).expect("generation");
            let image = buffer_to_image(table.buffer()).expect("three planes");

            let lit = image
                .pixels()
                .filter(|pixel| pixel.0.get(channel).is_some_and(|&value| value > 0))
                .count();
            let stray = image
                .pixels()
                .filter(|pixel| {
                    pixel
                        .0
                        .iter()
                        .enumerate()
                        .any(|(index, &value)| index != channel && value > 0)
                })
                .count();
            assert_eq!(lit, 255, "{face} table should light its own channel");
            assert_eq!(stray, 0, "{face} table leaked into another channel");
        }
    }

    // Tests buffers without three planes are rejected
    // Verified by removing the plane check
    #[test]
    fn test_buffer_to_image_rejects_two_planes() {
        let buffer = ColorBuffer::zeros((16, 16, 2));
        assert!(buffer_to_image(&buffer).is_err());
    }

    // Tests previews are written at the requested size with nearest sampling
    // Verified by disabling file save operation
    #[test]
    fn test_export_preview_creates_scaled_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("rg_phase.png");

        let mut buffer = blank_buffer();
        write_pixel(&mut buffer, 0, 0, [0, 0, 255]);
        export_preview(&buffer, &path, 64).expect("export succeeds");

        let written = image::open(&path).expect("readable png").to_rgb8();
        assert_eq!(written.dimensions(), (64, 64));
        assert_eq!(written.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(written.get_pixel(2, 1).0, [255, 0, 0]);
        assert_eq!(written.get_pixel(6, 6).0, [0, 0, 0]);
    }

    // Tests a zero preview size is rejected
    // Verified by removing the size check
    #[test]
    fn test_export_preview_rejects_zero_size() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.png");

        assert!(export_preview(&blank_buffer(), &path, 0).is_err());
        assert!(!path.exists());
    }

    // Tests the viewer exports named previews and reports them
    // Verified by skipping the path report
    #[test]
    fn test_viewer_exports_and_reports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut viewer = PreviewViewer::new(dir.path().to_path_buf(), 32, Vec::new(), true);

        viewer.show("RG", &blank_buffer()).expect("show succeeds");
        viewer
            .notify(&Notice::ChangeReturned(5))
            .expect("notify succeeds");

        let expected = dir.path().join("rg_phase.png");
        assert_eq!(viewer.preview_path("RG"), expected);
        assert_eq!(viewer.exported(), [expected.clone()].as_slice());
        assert!(expected.exists());
    }

    // Tests a viewer without path reports still exports but prints only notices
    // Verified by ignoring the report flag
    #[test]
    fn test_viewer_without_path_reports_prints_notices_only() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut output = Vec::new();
        {
            let mut viewer = PreviewViewer::new(dir.path().to_path_buf(), 16, &mut output, false);
            viewer.show("B", &blank_buffer()).expect("show succeeds");
            viewer.notify(&Notice::ShowingAll).expect("notify succeeds");
            assert_eq!(viewer.exported().len(), 1);
        }

        let text = String::from_utf8(output).expect("utf-8 output");
        assert_eq!(text, "Showing all images.\n");
        assert!(dir.path().join("b_phase.png").exists());
    }
}
