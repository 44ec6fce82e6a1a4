//! End-to-end run of the four figures

use numplot_rs::figures::{self, EULER_FILE, RECTANGLES_FILE, RK4_FILE, TRAPEZOIDS_FILE};
use tempfile::TempDir;

mod common;
use common::assert_image_written;

#[test]
fn test_generate_all_writes_four_images() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    figures::generate_all(dir.path(), &mut out).unwrap();

    for file in [RECTANGLES_FILE, TRAPEZOIDS_FILE, EULER_FILE, RK4_FILE] {
        assert_image_written(&dir.path().join(file));
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Генерация графиков...",
            "✓ Метод прямоугольников",
            "✓ Метод трапеций",
            "✓ Метод Эйлера",
            "✓ Метод Рунге-Кутта 4",
            "Все графики созданы!",
        ]
    );
}

#[test]
fn test_images_are_1200_by_750() {
    let dir = TempDir::new().unwrap();
    figures::render_euler(dir.path()).unwrap();

    // PNG IHDR: width and height as big-endian u32 at bytes 16..24
    let bytes = std::fs::read(dir.path().join(EULER_FILE)).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (1200, 750));
}

#[test]
fn test_rerun_overwrites_images() {
    let dir = TempDir::new().unwrap();

    figures::generate_all(dir.path(), &mut std::io::sink()).unwrap();
    let first = std::fs::read(dir.path().join(RECTANGLES_FILE)).unwrap();

    figures::generate_all(dir.path(), &mut std::io::sink()).unwrap();
    let second = std::fs::read(dir.path().join(RECTANGLES_FILE)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_images_directory_fails() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    let mut out = Vec::new();

    let result = figures::generate_all(&images, &mut out);

    assert!(result.is_err());
    assert!(!images.exists());
    assert!(!String::from_utf8(out).unwrap().contains('✓'));
}
