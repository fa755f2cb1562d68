//! End-to-end pipeline tests over real PNG files
//!
//! Each test builds its input with the streaming sink, runs the file
//! pipeline, and decodes the result with the streaming source, so the
//! whole open-plan-resample-finalize path is exercised.

use rowscale::{
    ColorMode, PngRowSink, PngRowSource, RasterInfo, ResampleError, RowBuffer, RowSink,
    RowSource, TargetSpec, resize_file,
};
use rowscale_test::normalized_distance;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("rowscale-e2e-{}-{}", std::process::id(), name));
    path
}

fn write_gray_png(path: &PathBuf, width: u32, height: u32, rows: &[Vec<u8>]) {
    let info = RasterInfo::new(width, height, ColorMode::Gray).unwrap();
    let mut sink = PngRowSink::create(path, info).unwrap();
    let mut row = RowBuffer::for_info(&info).unwrap();
    for samples in rows {
        row.as_mut_slice().copy_from_slice(samples);
        sink.write_row(&row).unwrap();
    }
    sink.finish().unwrap();
}

fn read_png(path: &PathBuf) -> (RasterInfo, Vec<u8>) {
    let mut source = PngRowSource::open(path).unwrap();
    let info = source.info();
    let mut row = RowBuffer::for_info(&info).unwrap();
    let mut samples = Vec::new();
    for _ in 0..info.height() {
        source.read_row(&mut row).unwrap();
        samples.extend_from_slice(row.as_slice());
    }
    (info, samples)
}

fn cleanup(paths: &[&PathBuf]) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn test_solid_gray_resize_to_half() {
    let input = temp_path("solid-in.png");
    let output = temp_path("solid-out.png");
    write_gray_png(&input, 4, 4, &vec![vec![128; 4]; 4]);

    let target = resize_file(
        &input,
        &output,
        TargetSpec::Exact {
            width: Some(2),
            height: Some(2),
        },
    )
    .expect("resize");
    assert_eq!((target.width(), target.height()), (2, 2));

    let (info, samples) = read_png(&output);
    assert_eq!((info.width(), info.height()), (2, 2));
    assert_eq!(samples, vec![128; 4]);
    cleanup(&[&input, &output]);
}

#[test]
fn test_fit_derives_height() {
    let input = temp_path("fit-in.png");
    let output = temp_path("fit-out.png");
    write_gray_png(&input, 4, 4, &vec![vec![7; 4]; 4]);

    let target = resize_file(
        &input,
        &output,
        TargetSpec::BoundedFit {
            max_width: Some(2),
            max_height: None,
        },
    )
    .expect("fit");
    assert_eq!((target.width(), target.height()), (2, 2));
    cleanup(&[&input, &output]);
}

#[test]
fn test_derived_dimension_preserves_aspect() {
    let input = temp_path("derive-in.png");
    let output = temp_path("derive-out.png");
    write_gray_png(&input, 4, 2, &vec![vec![50; 4]; 2]);

    let target = resize_file(
        &input,
        &output,
        TargetSpec::Exact {
            width: Some(2),
            height: None,
        },
    )
    .expect("resize");
    assert_eq!((target.width(), target.height()), (2, 1));
    cleanup(&[&input, &output]);
}

#[test]
fn test_block_average_matches_reference() {
    let input = temp_path("blocks-in.png");
    let output = temp_path("blocks-out.png");
    // Each output cell covers a 2x2 block of one gradient pair.
    write_gray_png(&input, 4, 4, &vec![vec![0, 80, 160, 240]; 4]);

    resize_file(
        &input,
        &output,
        TargetSpec::Exact {
            width: Some(2),
            height: Some(2),
        },
    )
    .expect("resize");

    let (info, samples) = read_png(&output);
    let expected = vec![40, 200, 40, 200];
    assert_eq!(normalized_distance(&info, &samples, &expected), 0.0);
    cleanup(&[&input, &output]);
}

#[test]
fn test_failed_resize_leaves_no_output() {
    let input = temp_path("fail-in.png");
    let output = temp_path("fail-out.png");
    // One-row source: any enlargement is unsupported and fails after the
    // output file was already created.
    write_gray_png(&input, 4, 1, &[vec![1, 2, 3, 4]]);

    let err = resize_file(
        &input,
        &output,
        TargetSpec::Exact {
            width: Some(8),
            height: Some(2),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ResampleError::UnsupportedUpscale { width: 4 }));
    assert!(!output.exists(), "partial output must be removed");
    cleanup(&[&input]);
}

#[test]
fn test_missing_input_reports_path() {
    let input = temp_path("missing.png");
    let output = temp_path("missing-out.png");
    let err = resize_file(
        &input,
        &output,
        TargetSpec::Exact {
            width: Some(2),
            height: Some(2),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("missing.png"));
    assert!(!output.exists());
}
