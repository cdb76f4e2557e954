use ndarray::{Array2, Array3};

use crate::lf_pipeline::common::error::StackError;
use crate::lf_pipeline::sai::processor::{crop_disparity, crop_sai};
use crate::lf_pipeline::sai::range::{grid_side, select_sai_range};
use crate::lf_pipeline::sai::types::{DisparityMap, SaiImage};

fn gradient_sai(width: usize, height: usize) -> SaiImage {
    // Encode the pixel position in the value so crops are checkable.
    let pixels = Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
        (y * 16 + x + c) as u8
    });
    SaiImage { pixels }
}

#[test]
fn test_select_range_boundary_case() {
    let range = select_sai_range(80, 49).unwrap();
    assert_eq!(range.left(), 16);
    assert_eq!(range.right(), 64);
    assert_eq!(range.len(), 49);
}

#[test]
fn test_select_range_is_centered() {
    for (n_sai, target) in [(81, 49), (49, 49), (100, 9), (81, 25)] {
        let range = select_sai_range(n_sai, target).unwrap();
        assert_eq!(range.len(), target);
        // Odd targets sit symmetrically around the middle view.
        assert_eq!(range.left() + range.right(), 2 * (n_sai / 2));
    }
}

#[test]
fn test_select_range_even_target() {
    let range = select_sai_range(12, 4).unwrap();
    assert_eq!(range.left(), 4);
    assert_eq!(range.right(), 7);
    assert_eq!(range.len(), 4);
}

#[test]
fn test_select_range_rejects_non_square() {
    let result = select_sai_range(81, 50);
    assert!(matches!(result, Err(StackError::InvalidRange(_))));
}

#[test]
fn test_select_range_rejects_zero() {
    let result = select_sai_range(81, 0);
    assert!(matches!(result, Err(StackError::InvalidRange(_))));
}

#[test]
fn test_select_range_rejects_target_exceeding_total() {
    let result = select_sai_range(16, 25);
    assert!(matches!(result, Err(StackError::InvalidRange(_))));
}

#[test]
fn test_range_contains_and_offset() {
    let range = select_sai_range(80, 49).unwrap();
    assert!(!range.contains(15));
    assert!(range.contains(16));
    assert!(range.contains(64));
    assert!(!range.contains(65));
    assert_eq!(range.offset(16), 0);
    assert_eq!(range.offset(64), 48);
}

#[test]
fn test_grid_side() {
    assert_eq!(grid_side(1).unwrap(), 1);
    assert_eq!(grid_side(49).unwrap(), 7);
    assert_eq!(grid_side(81).unwrap(), 9);
    assert!(grid_side(48).is_err());
}

#[test]
fn test_crop_sai_window_is_centered() {
    let sai = gradient_sai(6, 4);
    let cropped = crop_sai(&sai, 2).unwrap();

    assert_eq!(cropped.pixels.dim(), (2, 2, 3));
    // Window starts at ((6-2)/2, (4-2)/2) = (2, 1).
    for y in 0..2 {
        for x in 0..2 {
            for c in 0..3 {
                assert_eq!(
                    cropped.pixels[[y, x, c]],
                    sai.pixels[[y + 1, x + 2, c]]
                );
            }
        }
    }
}

#[test]
fn test_crop_sai_full_size_is_identity() {
    let sai = gradient_sai(5, 5);
    let cropped = crop_sai(&sai, 5).unwrap();
    assert_eq!(cropped.pixels, sai.pixels);
}

#[test]
fn test_crop_sai_rejects_small_source() {
    let sai = gradient_sai(4, 8);
    let result = crop_sai(&sai, 5);
    assert!(matches!(result, Err(StackError::ImageTooSmall(4, 8, 5))));
}

#[test]
fn test_crop_disparity_window_matches_image_window() {
    let map = DisparityMap {
        values: Array2::from_shape_fn((7, 9), |(y, x)| (y * 10 + x) as f32),
    };
    let cropped = crop_disparity(&map, 3).unwrap();

    assert_eq!(cropped.values.dim(), (3, 3));
    // Window starts at ((9-3)/2, (7-3)/2) = (3, 2).
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(cropped.values[[y, x]], map.values[[y + 2, x + 3]]);
        }
    }
}

#[test]
fn test_crop_disparity_rejects_small_source() {
    let map = DisparityMap {
        values: Array2::zeros((2, 2)),
    };
    assert!(matches!(
        crop_disparity(&map, 3),
        Err(StackError::ImageTooSmall(2, 2, 3))
    ));
}
