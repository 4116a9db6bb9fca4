use crate::color::{TargetColor, CHANNELS};

/// Euclidean distance between two points in RGB space.
pub fn euclidean(a: &[f64; CHANNELS], b: &[f64; CHANNELS]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Mean of the per-pixel distances to `target`.
///
/// This is deliberately not the distance to the average pixel: an image
/// split between two colors scores worse than a flat image of their mean.
/// Returns `None` for an empty pixel set.
pub fn mean_distance<I>(target: &TargetColor, pixels: I) -> Option<f64>
where
    I: IntoIterator<Item = [u8; CHANNELS]>,
{
    let target = target.as_point();
    let (sum, count) = pixels.into_iter().fold((0.0f64, 0usize), |(sum, n), px| {
        (sum + euclidean(&target, &px.map(f64::from)), n + 1)
    });

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
