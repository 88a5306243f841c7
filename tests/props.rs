use ndarray::{Array, Array1, Axis};
use proptest::prelude::*;
use sigframe::frame::frame;
use sigframe::shape::{StaticDim, frame_count, infer_frame_shape, padded_length};
use sigframe::windowing::apply_window;

fn ramp(len: usize) -> Array1<f64> {
    Array1::from_iter((0..len).map(|i| i as f64 + 1.0))
}

proptest! {
    #[test]
    fn unpadded_frame_count(len in 0usize..300, l in 1usize..40, h in 1usize..40) {
        let frames = frame(&ramp(len), l, h, false, 0.0, -1).unwrap();
        let expected = ((len as i64 - l as i64).div_euclid(h as i64) + 1).max(0) as usize;
        prop_assert_eq!(frames.shape(), &[expected, l][..]);
        if len < l {
            prop_assert_eq!(frames.shape()[0], 0);
        }
    }

    #[test]
    fn padded_frame_count_and_length(len in 0usize..300, l in 1usize..40, h in 1usize..40) {
        let frames = frame(&ramp(len), l, h, true, 0.0, -1).unwrap();
        let n = len.div_ceil(h);
        prop_assert_eq!(frames.shape(), &[n, l][..]);
        if n > 0 {
            prop_assert_eq!(padded_length(len, l, h), l + h * (n - 1));
        }
    }

    #[test]
    fn frames_are_contiguous_slices(
        len in 1usize..200,
        l in 1usize..30,
        h in 1usize..30,
        pad_end in any::<bool>(),
    ) {
        let y = ramp(len);
        let frames = frame(&y, l, h, pad_end, -1.0, -1).unwrap();
        for (i, f) in frames.axis_iter(Axis(0)).enumerate() {
            for (j, &v) in f.iter().enumerate() {
                let t = i * h + j;
                let expected = if t < len { y[t] } else { -1.0 };
                prop_assert_eq!(v, expected);
            }
        }
    }

    #[test]
    fn batched_frames_are_independent(
        batch in 1usize..4,
        len in 1usize..80,
        l in 1usize..12,
        h in 1usize..12,
        pad_end in any::<bool>(),
    ) {
        let signal = Array::from_shape_fn((batch, len), |(b, t)| (b * 1000 + t) as f64);
        let frames = frame(&signal, l, h, pad_end, 0.0, -1).unwrap();
        for b in 0..batch {
            let row = signal.index_axis(Axis(0), b).to_owned();
            let single = frame(&row, l, h, pad_end, 0.0, -1).unwrap();
            prop_assert_eq!(frames.index_axis(Axis(0), b), single.view());
        }
    }

    #[test]
    fn hop_equal_to_frame_round_trips(len in 1usize..300, l in 1usize..40) {
        let y = ramp(len);
        let frames = frame(&y, l, l, true, 0.0, -1).unwrap();
        let flat: Vec<f64> = frames.iter().copied().collect();
        prop_assert_eq!(flat.len(), padded_length(len, l, l));
        prop_assert_eq!(&flat[..len], y.as_slice().unwrap());
        prop_assert!(flat[len..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn windowing_is_elementwise(n in 1usize..8, l in 1usize..16, seed in 0u64..1000) {
        let frames = Array::from_shape_fn((n, l), |(i, j)| ((i * 31 + j * 7) as u64 ^ seed) as f64);
        let w: Vec<f64> = (0..l).map(|j| (j as f64 + 0.5) / l as f64).collect();
        let out = apply_window(&frames, &w, -1).unwrap();
        for ((i, j), &x) in frames.indexed_iter() {
            prop_assert_eq!(out[[i, j]], x * w[j]);
        }
    }

    #[test]
    fn inferred_shape_matches_output(
        batch in 1usize..4,
        len in 0usize..120,
        l in 1usize..20,
        h in 1usize..20,
        pad_end in any::<bool>(),
    ) {
        let signal = Array::<f32, _>::zeros((batch, len));
        let frames = frame(&signal, l, h, pad_end, 0.0, 1).unwrap();
        let shape: [StaticDim; 2] = [Some(batch), Some(len)];
        let inferred = infer_frame_shape(Some(&shape[..]), Some(l), Some(h), pad_end, Some(-1))
            .unwrap()
            .unwrap();
        let inferred: Vec<usize> = inferred.into_iter().map(|d| d.unwrap()).collect();
        prop_assert_eq!(frames.shape(), &inferred[..]);
        prop_assert_eq!(inferred[1], frame_count(len, l, h, pad_end));
    }
}
