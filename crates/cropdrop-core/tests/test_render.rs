mod common;

use image::{DynamicImage, Rgba};

use cropdrop_core::crop::geometry::EditorGeometry;
use cropdrop_core::crop::params::{CropParams, Position, Zoom};
use cropdrop_core::crop::render::{render_blob, render_crop};
use cropdrop_core::error::CropDropError;
use cropdrop_core::io::image_io::{decode_image, encode_png};

use common::{gradient_image, jpeg_bytes, png_bytes};

fn zoomed(zoom: f32) -> CropParams {
    CropParams {
        zoom: Zoom::new(zoom),
        position: Position::default(),
    }
}

fn source(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(gradient_image(width, height))
}

#[test]
fn test_zoom_one_keeps_whole_square_image() {
    let out = render_crop(&source(100, 100), &zoomed(1.0), &EditorGeometry::default()).unwrap();
    assert_eq!(out.dimensions(), (100, 100));
    assert_eq!(*out.get_pixel(10, 20), Rgba([10, 20, 128, 255]));
}

#[test]
fn test_zoom_two_crops_centre_at_full_resolution() {
    let out = render_crop(&source(100, 100), &zoomed(2.0), &EditorGeometry::default()).unwrap();
    assert_eq!(out.dimensions(), (50, 50));
    assert_eq!(*out.get_pixel(0, 0), Rgba([25, 25, 128, 255]));
    assert_eq!(*out.get_pixel(49, 49), Rgba([74, 74, 128, 255]));
}

#[test]
fn test_zoom_out_pads_with_transparency() {
    let out = render_crop(&source(100, 100), &zoomed(0.5), &EditorGeometry::default()).unwrap();
    assert_eq!(out.dimensions(), (200, 200));
    assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*out.get_pixel(50, 50), Rgba([0, 0, 128, 255]));
    assert_eq!(*out.get_pixel(149, 149), Rgba([99, 99, 128, 255]));
    assert_eq!(*out.get_pixel(150, 150), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_landscape_crops_to_square() {
    let out = render_crop(&source(200, 100), &zoomed(1.0), &EditorGeometry::default()).unwrap();
    assert_eq!(out.dimensions(), (100, 100));
    assert_eq!(*out.get_pixel(0, 0), Rgba([50, 0, 128, 255]));
}

#[test]
fn test_zoom_out_of_large_image_is_refused() {
    let err = render_crop(&source(1200, 1200), &zoomed(0.1), &EditorGeometry::default())
        .unwrap_err();
    assert!(
        matches!(err, CropDropError::CropTooLarge { width: 12000, height: 12000 }),
        "got: {err}"
    );

    let out = render_crop(&source(40, 40), &zoomed(0.1), &EditorGeometry::default()).unwrap();
    assert_eq!(out.dimensions(), (400, 400));
}

#[test]
fn test_render_blob_is_png() {
    let blob = render_blob(&png_bytes(100, 100), &zoomed(2.0), &EditorGeometry::default()).unwrap();
    assert_eq!(image::guess_format(&blob).unwrap(), image::ImageFormat::Png);

    let decoded = decode_image(&blob).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (50, 50));
}

#[test]
fn test_render_blob_from_jpeg() {
    let blob = render_blob(&jpeg_bytes(64, 32), &zoomed(1.0), &EditorGeometry::default()).unwrap();
    let decoded = decode_image(&blob).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
}

#[test]
fn test_render_blob_rejects_garbage() {
    let err = render_blob(b"not an image", &zoomed(1.0), &EditorGeometry::default()).unwrap_err();
    assert!(matches!(err, CropDropError::ImageError(_)), "got: {err}");
}

#[test]
fn test_encode_png_roundtrip_dimensions() {
    let canvas = image::RgbaImage::new(7, 3);
    let bytes = encode_png(&canvas).unwrap();
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (7, 3));
}
